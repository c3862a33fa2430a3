//! Derived report types
//!
//! This module centralizes the computed shapes the reporting core returns:
//! - Date ranges for week/month navigation
//! - Team and per-member summaries
//! - Category breakdowns and daily series
//!
//! All of these are derived values: computed from record snapshots, never
//! stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/* Date Ranges */
/* -------------------------------------------------------------------------- */

/// An inclusive calendar date range with a display label
///
/// Boundaries are the tested contract; `label` is a presentation convenience
/// (e.g. "May 12 – May 18, 2025" for a week, "May 2025" for a month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive)
    pub start: NaiveDate,

    /// Last day of the range (inclusive)
    pub end: NaiveDate,

    /// Human-readable range label
    pub label: String,
}

/* -------------------------------------------------------------------------- */
/* Team Summary */
/* -------------------------------------------------------------------------- */

/// Aggregate summary over a set of timesheet entries
///
/// Degenerate inputs are well-defined: an empty entry set yields zero totals
/// and `None` for the most/least active members, never NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    /// Sum of logged hours across all entries
    pub total_hours: f64,

    /// `total_hours / distinct member count`; 0 when there are no members
    pub average_per_member: f64,

    /// Member with the highest summed hours (first-encountered wins ties)
    pub most_active_member_id: Option<String>,

    /// Member with the lowest summed hours (first-encountered wins ties)
    pub least_active_member_id: Option<String>,

    /// Total completed tasks across the summarized period
    pub total_tasks_completed: u32,
}

impl TeamSummary {
    /// The well-defined zero summary for an empty input set
    pub fn empty() -> Self {
        Self {
            total_hours: 0.0,
            average_per_member: 0.0,
            most_active_member_id: None,
            least_active_member_id: None,
            total_tasks_completed: 0,
        }
    }
}

/// Per-status tally of timesheet entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub approved: u32,
    pub pending: u32,
    pub rejected: u32,
}

/* -------------------------------------------------------------------------- */
/* Per-Member Activity */
/* -------------------------------------------------------------------------- */

/// Per-member rollup for the leader report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberActivity {
    /// Member identifier
    pub member_id: String,

    /// Display name (empty when the roster has no matching member)
    pub name: String,

    /// Summed logged hours
    pub total_hours: f64,

    /// Completed task count for the period
    pub tasks_completed: u32,

    /// Hours above the configured standard; 0 when under it
    pub overtime_hours: f64,

    /// Summed hours per category, in first-appearance order
    pub hours_by_category: Vec<CategorySlice>,
}

/* -------------------------------------------------------------------------- */
/* Breakdowns & Series */
/* -------------------------------------------------------------------------- */

/// One category's share of a breakdown
///
/// # Field Invariants
/// - `percentage` uses round-half-up and the column sums to 100 ± 1 over a
///   full breakdown, or exactly 0 when total hours is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    /// Category name
    pub category: String,

    /// Summed hours for the category
    pub hours: f64,

    /// Rounded percentage of the breakdown total
    pub percentage: u32,
}

/// One day of the daily hours series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHours {
    /// Calendar day
    pub date: NaiveDate,

    /// Summed hours for the day (0 for days with no entries)
    pub hours: f64,
}

/// Period-over-period change in logged hours
///
/// Reported the way the app displays it: an absolute percentage plus a
/// direction flag. A zero previous period reads as a 0% increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductivityTrend {
    /// Absolute rounded percentage change
    pub percentage: u32,

    /// Whether the current period is at or above the previous one
    pub is_increase: bool,
}

/* -------------------------------------------------------------------------- */
/* Composed Reports */
/* -------------------------------------------------------------------------- */

/// Everything one report view needs, computed in a single pass
///
/// The leader and member report screens both render from this shape; they
/// differ only in how the entry set was pre-filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// The week/month range the report covers
    pub range: DateRange,

    /// Aggregate team summary over the range
    pub summary: TeamSummary,

    /// Per-status tally over the range
    pub status_counts: StatusCounts,

    /// Per-category breakdown over the range
    pub category_breakdown: Vec<CategorySlice>,

    /// Zero-filled per-day hours over the range
    pub daily_series: Vec<DailyHours>,

    /// Change against the immediately preceding period
    pub trend: ProductivityTrend,
}
