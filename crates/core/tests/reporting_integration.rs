//! Integration tests for the reporting pipeline
//!
//! Drives the full filter -> bucket -> group -> aggregate flow over a small
//! team fixture, the way the report screens compose the core.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Weekday};
use shiftbook_core::{
    calendar, filter, grouping, FilterCriteria, RangeUnit, ReportService, ReviewRow, SortKey,
};
use shiftbook_domain::{
    Member, ReportConfig, Role, Task, TaskPriority, TimesheetEntry, TimesheetStatus,
};

// ============================================================================
// Full Pipeline Tests
// ============================================================================

/// The leader report flow: filter to one member, then summarize the week
#[test]
fn test_leader_report_single_member_flow() -> Result<()> {
    let fixture = TeamFixture::may_week();
    let service = ReportService::default();

    let criteria = FilterCriteria::all().with_member("m2");
    let bobs = filter::apply(&fixture.entries, &criteria);
    assert!(bobs.iter().all(|e| e.member_id == "m2"));

    let report = service.period_report(&bobs, &fixture.tasks, reference_day(), RangeUnit::Week);
    assert_eq!(report.summary.most_active_member_id.as_deref(), Some("m2"));
    assert_eq!(report.summary.least_active_member_id.as_deref(), Some("m2"));
    assert_eq!(report.summary.average_per_member, report.summary.total_hours);
    Ok(())
}

/// The member report flow: week report with breakdown, series, and trend
#[test]
fn test_member_report_week_flow() -> Result<()> {
    let fixture = TeamFixture::may_week();
    let service = ReportService::default();

    let report =
        service.period_report(&fixture.entries, &fixture.tasks, reference_day(), RangeUnit::Week);

    // The week of May 12-18 holds all current entries; May 7 feeds the trend
    assert_eq!(report.range.start, NaiveDate::from_ymd_opt(2025, 5, 12).unwrap());
    assert_eq!(report.daily_series.len(), 7);

    let series_total: f64 = report.daily_series.iter().map(|p| p.hours).sum();
    assert!((series_total - report.summary.total_hours).abs() < 1e-9);

    let breakdown_total: f64 = report.category_breakdown.iter().map(|s| s.hours).sum();
    assert!((breakdown_total - report.summary.total_hours).abs() < 1e-9);

    let pct_sum: u32 = report.category_breakdown.iter().map(|s| s.percentage).sum();
    assert!((99..=101).contains(&pct_sum));
    Ok(())
}

/// The approve screen flow: search + status filter, then grouped review rows
#[test]
fn test_approve_screen_flow() -> Result<()> {
    let fixture = TeamFixture::may_week();

    let pending = filter::apply(&fixture.entries, &FilterCriteria::all().with_status("Pending"));
    assert!(pending.iter().all(|e| e.status == TimesheetStatus::Pending));

    let rows: Vec<ReviewRow> = pending
        .iter()
        .map(|entry| ReviewRow::from_entry(entry, fixture.name_of(&entry.member_id), 2))
        .collect();

    // The review list searches rows by member name, case-insensitively
    let hits = filter::apply(&rows, &FilterCriteria::all().with_search("bob"));
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|row| row.name == "Bob Johnson"));

    let groups = grouping::group_and_sort_default(&rows, SortKey::Date);
    // Newest date header first
    let dates: Vec<NaiveDate> = groups.iter().map(|g| g.items[0].date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);

    // Regrouping the flattened list reproduces the grouping exactly
    let regrouped = grouping::group_and_sort_default(&grouping::flatten(&groups), SortKey::Date);
    assert_eq!(groups, regrouped);
    Ok(())
}

/// The overview flow: week navigation plus bucketing and due-soon alerts
#[test]
fn test_overview_navigation_flow() -> Result<()> {
    let fixture = TeamFixture::may_week();
    let service = ReportService::new(ReportConfig { week_start: Weekday::Mon, ..Default::default() });

    let range = calendar::range_for(reference_day(), RangeUnit::Week, Weekday::Mon);
    let buckets = calendar::bucket_by_date(&fixture.entries, |entry| entry.date);
    // Two members logged May 12; the previous-week entry gets its own bucket
    assert_eq!(buckets[&NaiveDate::from_ymd_opt(2025, 5, 12).unwrap()].len(), 2);
    assert_eq!(buckets[&NaiveDate::from_ymd_opt(2025, 5, 7).unwrap()].len(), 1);

    // Walk one week back and forward again
    let previous = calendar::shift_range(&range, RangeUnit::Week, -1, Weekday::Mon);
    let back = calendar::shift_range(&previous, RangeUnit::Week, 1, Weekday::Mon);
    assert_eq!(back, range);

    let due = service.tasks_due_soon(&fixture.tasks, reference_day());
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].title, "Fix login regression");
    Ok(())
}

// ============================================================================
// Fixture
// ============================================================================

/// A week of entries for a three-person team, May 12-18 2025, plus one entry
/// the week before (trend input) and a small task list
struct TeamFixture {
    members: Vec<Member>,
    entries: Vec<TimesheetEntry>,
    tasks: Vec<Task>,
}

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
}

impl TeamFixture {
    fn may_week() -> Self {
        let members = vec![
            Member::new("m1", "Alice Wong", Role::Leader),
            Member::new("m2", "Bob Johnson", Role::Member),
            Member::new("m3", "Carol Martinez", Role::Member),
        ];

        let mut entries = vec![
            entry("m1", 2025, 5, 12, 8.0, "Development", "Sprint work"),
            entry("m2", 2025, 5, 12, 7.5, "Meeting", "Client call"),
            entry("m3", 2025, 5, 13, 9.0, "Testing", "Regression pass"),
            entry("m1", 2025, 5, 14, 8.0, "Development", "Feature work"),
            entry("m2", 2025, 5, 15, 4.0, "Documentation", "API docs"),
            // Previous week, only the trend sees it
            entry("m1", 2025, 5, 7, 6.0, "Development", "Spike"),
        ];
        entries[0].approve().unwrap();
        entries[2].reject("Wrong task category").unwrap();

        let mut shipped =
            Task::assign("Ship May release", "m1", "Development", TaskPriority::High, None);
        shipped.advance().unwrap();
        shipped.advance().unwrap();

        let tasks = vec![
            shipped,
            Task::assign(
                "Fix login regression",
                "m2",
                "Development",
                TaskPriority::High,
                NaiveDate::from_ymd_opt(2025, 5, 15),
            ),
            Task::assign(
                "Plan June sprint",
                "m3",
                "Planning",
                TaskPriority::Medium,
                NaiveDate::from_ymd_opt(2025, 5, 30),
            ),
        ];

        Self { members, entries, tasks }
    }

    fn name_of(&self, member_id: &str) -> String {
        self.members
            .iter()
            .find(|member| member.id == member_id)
            .map(|member| member.name.clone())
            .unwrap_or_default()
    }
}

fn entry(
    member_id: &str,
    y: i32,
    m: u32,
    d: u32,
    hours: f64,
    category: &str,
    notes: &str,
) -> TimesheetEntry {
    TimesheetEntry::submit(
        member_id,
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        hours,
        category,
        notes,
    )
}
