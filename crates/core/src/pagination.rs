//! Limit handling for list endpoints.
//!
//! Limits always reach SQL as bound parameters; these helpers only decide
//! the value.

/// Default page size for project listings.
pub const DEFAULT_PROJECT_LIMIT: i64 = 20;

/// Upper bound for any caller-supplied limit.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}
