//! Report aggregation
//!
//! Summaries, breakdowns, and series over timesheet and task snapshots. One
//! service covers every report screen; the screens differ only in which
//! filter/range parameters they pass, not in aggregation logic.

mod service;

pub use service::{total_hours, ReportService};
