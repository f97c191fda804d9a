//! Domain types shared by the database, automation, and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod pagination;
pub mod project_status;
pub mod stats;
pub mod theme;
pub mod types;
