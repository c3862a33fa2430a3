//! Domain types and models
//!
//! Value records only: every entity is an immutable snapshot with a plain
//! `String` id, serialized with serde at the boundary. Derived report shapes
//! live in [`report`] and are computed, never stored.

pub mod member;
pub mod report;
pub mod task;
pub mod timesheet;

// Re-export the commonly used types for convenience
pub use member::{Member, Role};
pub use report::{
    CategorySlice, DailyHours, DateRange, MemberActivity, PeriodReport, ProductivityTrend,
    StatusCounts, TeamSummary,
};
pub use task::{Task, TaskPriority, TaskStatus};
pub use timesheet::{TimesheetEntry, TimesheetStatus};
