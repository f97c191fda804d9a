pub mod admin;
pub mod automation;
pub mod downloads;
pub mod projects;
pub mod stats;
pub mod themes;
