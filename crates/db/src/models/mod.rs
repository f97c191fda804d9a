//! Row models and DTOs.
//!
//! Rust and SQL names are English. JSON names follow the contract the
//! selection UI and the automation workflow already consume, so the
//! mapping lives on the structs as serde renames.

pub mod project;
pub mod stats;
pub mod theme;
