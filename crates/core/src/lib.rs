//! # ShiftBook Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The filter engine (status, member, free-text search)
//! - Calendar ranges and date bucketing
//! - Stable grouping and sorting of report rows
//! - Report aggregation (summaries, breakdowns, series, trends)
//!
//! ## Architecture Principles
//! - Only depends on `shiftbook-domain`
//! - No database, HTTP, or platform code
//! - All operations are synchronous pure functions over immutable snapshots
//! - The reference date is always an explicit parameter; nothing reads the
//!   wall clock

pub mod calendar;
pub mod filter;
pub mod grouping;
pub mod reporting;

// Re-export specific items to avoid ambiguity
pub use calendar::{bucket_by_date, days_in, is_within_range, range_for, shift_range, RangeUnit};
pub use filter::{apply, apply_task_view, FilterCriteria, Filterable, TaskView, STATUS_ALL};
pub use grouping::{
    flatten, group_and_sort, group_and_sort_default, parse_leading_hours, GroupRecord,
    RecordGroup, ReviewRow, SortDirection, SortKey,
};
pub use reporting::{total_hours, ReportService};
