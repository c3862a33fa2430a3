//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! reporting core.

use chrono::Weekday;

// Calendar defaults
pub const DEFAULT_WEEK_START: Weekday = Weekday::Mon;

// Reporting defaults
pub const STANDARD_WEEKLY_HOURS: f64 = 40.0;
pub const DUE_SOON_WINDOW_DAYS: i64 = 2;

// Tolerance for floating-point hour comparisons
pub const HOURS_EPSILON: f64 = 1e-9;

// Display formats (chrono strftime)
pub const GROUP_DATE_FORMAT: &str = "%a, %b %-d, %Y";
pub const RANGE_DAY_FORMAT: &str = "%b %-d";
pub const RANGE_DAY_YEAR_FORMAT: &str = "%b %-d, %Y";
pub const RANGE_MONTH_FORMAT: &str = "%B %Y";
