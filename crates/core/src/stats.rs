//! Fixed reporting windows for the statistics endpoint.

/// Trailing window for the headline numbers and per-theme breakdown.
pub const MONTHLY_WINDOW_DAYS: i32 = 30;

/// Trailing window for the weekly summary and per-day breakdown.
pub const WEEKLY_WINDOW_DAYS: i32 = 7;

/// Number of error log entries returned in the recent-errors list.
pub const RECENT_ERROR_LIMIT: i64 = 10;
