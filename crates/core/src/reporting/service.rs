//! Report service - aggregation over record snapshots
//!
//! All methods are pure and synchronous: inputs are immutable snapshots, the
//! reference date is always explicit, and degenerate inputs (empty sets, zero
//! members, zero hours) return well-defined zero/empty/`None` results rather
//! than NaN.

use chrono::NaiveDate;
use shiftbook_domain::{
    CategorySlice, DailyHours, DateRange, Member, MemberActivity, PeriodReport, ProductivityTrend,
    ReportConfig, StatusCounts, Task, TaskStatus, TeamSummary, TimesheetEntry, TimesheetStatus,
};
use tracing::debug;

use crate::calendar::{self, RangeUnit};
use crate::filter::{self, TaskView};

/// Sum of logged hours across a set of entries
pub fn total_hours(entries: &[TimesheetEntry]) -> f64 {
    entries.iter().map(|entry| entry.hours).sum()
}

/// Report aggregation service
///
/// Holds the reporting tunables; every method is a pure function of its
/// arguments and the config.
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    config: ReportConfig,
}

impl ReportService {
    /// Create a service with the given config
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// The active config
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Summarize a set of entries and the team's tasks
    ///
    /// Most/least active ties are broken by the first-encountered member id,
    /// in input order. Empty input yields the zero summary.
    pub fn summarize(&self, entries: &[TimesheetEntry], tasks: &[Task]) -> TeamSummary {
        let per_member = hours_per_member(entries);
        if per_member.is_empty() {
            let mut summary = TeamSummary::empty();
            summary.total_tasks_completed = completed_count(tasks);
            return summary;
        }

        let total = total_hours(entries);

        let mut most = &per_member[0];
        let mut least = &per_member[0];
        for bucket in &per_member[1..] {
            // Strict comparisons keep the first-encountered member on ties
            if bucket.1 > most.1 {
                most = bucket;
            }
            if bucket.1 < least.1 {
                least = bucket;
            }
        }

        debug!(
            members = per_member.len(),
            total_hours = total,
            "summarized timesheet entries"
        );

        TeamSummary {
            total_hours: total,
            average_per_member: total / per_member.len() as f64,
            most_active_member_id: Some(most.0.clone()),
            least_active_member_id: Some(least.0.clone()),
            total_tasks_completed: completed_count(tasks),
        }
    }

    /// Per-category hours with each category's share of the summed total
    ///
    /// Percentages use round-half-up over the breakdown's own total (not a
    /// separately tracked grand total), so the column sums to 100 ± 1. Zero
    /// total hours yields zero percentages; empty input yields an empty vec.
    pub fn category_breakdown(&self, entries: &[TimesheetEntry]) -> Vec<CategorySlice> {
        let mut slices: Vec<CategorySlice> = Vec::new();
        for entry in entries {
            match slices.iter_mut().find(|slice| slice.category == entry.category) {
                Some(slice) => slice.hours += entry.hours,
                None => slices.push(CategorySlice {
                    category: entry.category.clone(),
                    hours: entry.hours,
                    percentage: 0,
                }),
            }
        }

        let total: f64 = slices.iter().map(|slice| slice.hours).sum();
        if total > 0.0 {
            for slice in &mut slices {
                slice.percentage = (100.0 * slice.hours / total).round() as u32;
            }
        }
        slices
    }

    /// One data point per calendar day of the range, zero-filled
    ///
    /// The series always has exactly as many points as the range has days,
    /// regardless of data sparsity. Entries outside the range are ignored.
    pub fn daily_series(&self, entries: &[TimesheetEntry], range: &DateRange) -> Vec<DailyHours> {
        let mut series: Vec<DailyHours> = calendar::days_in(range)
            .into_iter()
            .map(|date| DailyHours { date, hours: 0.0 })
            .collect();

        for entry in entries {
            if let Some(point) = series.iter_mut().find(|point| point.date == entry.date) {
                point.hours += entry.hours;
            }
        }
        series
    }

    /// Per-status tally of a set of entries
    pub fn status_counts(&self, entries: &[TimesheetEntry]) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for entry in entries {
            match entry.status {
                TimesheetStatus::Approved => counts.approved += 1,
                TimesheetStatus::Pending => counts.pending += 1,
                TimesheetStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }

    /// Per-member rollups, in first-appearance order of the entries
    ///
    /// Names come from the roster; a member missing from it gets an empty
    /// name rather than dropping the rollup. Overtime is hours above the
    /// configured standard. Category percentages are of the member's own
    /// total.
    pub fn member_activity(
        &self,
        entries: &[TimesheetEntry],
        members: &[Member],
        tasks: &[Task],
    ) -> Vec<MemberActivity> {
        hours_per_member(entries)
            .into_iter()
            .map(|(member_id, member_total)| {
                let member_entries: Vec<TimesheetEntry> = entries
                    .iter()
                    .filter(|entry| entry.member_id == member_id)
                    .cloned()
                    .collect();
                let name = members
                    .iter()
                    .find(|member| member.id == member_id)
                    .map(|member| member.name.clone())
                    .unwrap_or_default();
                let tasks_completed = tasks
                    .iter()
                    .filter(|task| {
                        task.assignee_id == member_id && task.status == TaskStatus::Completed
                    })
                    .count() as u32;

                MemberActivity {
                    member_id,
                    name,
                    total_hours: member_total,
                    tasks_completed,
                    overtime_hours: (member_total - self.config.standard_weekly_hours).max(0.0),
                    hours_by_category: self.category_breakdown(&member_entries),
                }
            })
            .collect()
    }

    /// Highest per-member total, used to scale the report bar chart
    pub fn peak_hours(&self, activities: &[MemberActivity]) -> f64 {
        activities.iter().map(|activity| activity.total_hours).fold(0.0, f64::max)
    }

    /// Period-over-period change in summed hours
    ///
    /// A zero previous period reads as a 0% increase rather than a division;
    /// otherwise the rounded absolute change plus a direction flag.
    pub fn trend_between(&self, current_hours: f64, previous_hours: f64) -> ProductivityTrend {
        if previous_hours == 0.0 {
            return ProductivityTrend { percentage: 0, is_increase: true };
        }
        let change = 100.0 * (current_hours - previous_hours) / previous_hours;
        ProductivityTrend {
            percentage: change.abs().round() as u32,
            is_increase: change >= 0.0,
        }
    }

    /// Trend for a range against the immediately preceding week/month
    pub fn productivity_trend(
        &self,
        entries: &[TimesheetEntry],
        range: &DateRange,
        unit: RangeUnit,
    ) -> ProductivityTrend {
        let previous = calendar::shift_range(range, unit, -1, self.config.week_start);
        let current_hours = total_hours(&entries_within(entries, range));
        let previous_hours = total_hours(&entries_within(entries, &previous));
        self.trend_between(current_hours, previous_hours)
    }

    /// Open tasks due within the configured window of `reference`
    pub fn tasks_due_soon(&self, tasks: &[Task], reference: NaiveDate) -> Vec<Task> {
        filter::apply_task_view(tasks, TaskView::DueSoon, reference, self.config.due_soon_days)
    }

    /// The full report for one week/month view
    ///
    /// This is the consolidated entry point the screens share: the same
    /// computation backs the leader and member reports, parameterized by the
    /// caller's pre-filtered entry set and the reference date.
    pub fn period_report(
        &self,
        entries: &[TimesheetEntry],
        tasks: &[Task],
        reference: NaiveDate,
        unit: RangeUnit,
    ) -> PeriodReport {
        let range = calendar::range_for(reference, unit, self.config.week_start);
        let in_range = entries_within(entries, &range);

        debug!(
            range = %range.label,
            entries = in_range.len(),
            "building period report"
        );

        PeriodReport {
            summary: self.summarize(&in_range, tasks),
            status_counts: self.status_counts(&in_range),
            category_breakdown: self.category_breakdown(&in_range),
            daily_series: self.daily_series(&in_range, &range),
            trend: self.productivity_trend(entries, &range, unit),
            range,
        }
    }
}

/// Summed hours per member, in first-appearance order
fn hours_per_member(entries: &[TimesheetEntry]) -> Vec<(String, f64)> {
    let mut buckets: Vec<(String, f64)> = Vec::new();
    for entry in entries {
        match buckets.iter_mut().find(|(id, _)| *id == entry.member_id) {
            Some((_, hours)) => *hours += entry.hours,
            None => buckets.push((entry.member_id.clone(), entry.hours)),
        }
    }
    buckets
}

fn entries_within(entries: &[TimesheetEntry], range: &DateRange) -> Vec<TimesheetEntry> {
    entries
        .iter()
        .filter(|entry| calendar::is_within_range(entry.date, range))
        .cloned()
        .collect()
}

fn completed_count(tasks: &[Task]) -> u32 {
    tasks.iter().filter(|task| task.status == TaskStatus::Completed).count() as u32
}
