//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod project_repo;
pub mod stats_repo;
pub mod theme_repo;

pub use project_repo::ProjectRepo;
pub use stats_repo::StatsRepo;
pub use theme_repo::ThemeRepo;
