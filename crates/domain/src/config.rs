//! Reporting configuration
//!
//! Plain configuration struct consumed by the core reporting service. There
//! is no file or environment loading here: the host supplies overrides and
//! `Default` covers the common case.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WEEK_START, DUE_SOON_WINDOW_DAYS, STANDARD_WEEKLY_HOURS};

/// Tunables for report computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// First day of the calendar week used for week bucketing
    pub week_start: Weekday,

    /// Hours per week above which a member's time counts as overtime
    pub standard_weekly_hours: f64,

    /// Tasks due within this many days of the reference date are "due soon"
    pub due_soon_days: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            week_start: DEFAULT_WEEK_START,
            standard_weekly_hours: STANDARD_WEEKLY_HOURS,
            due_soon_days: DUE_SOON_WINDOW_DAYS,
        }
    }
}
