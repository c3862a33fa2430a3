//! Calendar ranges and date bucketing
//!
//! Week/month boundary computation for an arbitrary reference date, range
//! navigation (prev/next), and day-level bucketing of dated records. All
//! functions take the reference date explicitly; nothing in this module reads
//! the wall clock.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use shiftbook_domain::constants::{RANGE_DAY_FORMAT, RANGE_DAY_YEAR_FORMAT, RANGE_MONTH_FORMAT};
use shiftbook_domain::DateRange;
use tracing::warn;

/// Calendar interval used for range bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeUnit {
    Week,
    Month,
}

/// Compute the week or month range containing `reference`
///
/// Weeks run `week_start` through `week_start + 6`; months run the first
/// through the last calendar day. Both ends are inclusive.
pub fn range_for(reference: NaiveDate, unit: RangeUnit, week_start: Weekday) -> DateRange {
    match unit {
        RangeUnit::Week => {
            let start = reference.week(week_start).first_day();
            let end = start + Duration::days(6);
            let label = format!(
                "{} – {}",
                start.format(RANGE_DAY_FORMAT),
                end.format(RANGE_DAY_YEAR_FORMAT)
            );
            DateRange { start, end, label }
        }
        RangeUnit::Month => {
            let start = first_of_month(reference);
            let end = last_of_month(reference);
            let label = start.format(RANGE_MONTH_FORMAT).to_string();
            DateRange { start, end, label }
        }
    }
}

/// Move a range by `delta` whole weeks or months and recompute it
///
/// Month navigation clamps to month length, so shifting a January range
/// forward lands on February rather than overflowing into March. A `delta`
/// that would leave the supported calendar leaves the range unchanged.
pub fn shift_range(range: &DateRange, unit: RangeUnit, delta: i32, week_start: Weekday) -> DateRange {
    let reference = match unit {
        RangeUnit::Week => range.start.checked_add_signed(Duration::days(7 * i64::from(delta))),
        RangeUnit::Month => {
            // Shift from day 1 so month-length differences cannot skip a month
            let anchor = first_of_month(range.start);
            if delta >= 0 {
                anchor.checked_add_months(Months::new(delta.unsigned_abs()))
            } else {
                anchor.checked_sub_months(Months::new(delta.unsigned_abs()))
            }
        }
    };

    match reference {
        Some(reference) => range_for(reference, unit, week_start),
        None => {
            warn!(delta, "range shift left the supported calendar, keeping range");
            range.clone()
        }
    }
}

/// Whether `date` falls inside the range, inclusive on both ends
pub fn is_within_range(date: NaiveDate, range: &DateRange) -> bool {
    date >= range.start && date <= range.end
}

/// Every calendar day of the range, in order
///
/// A single-day range yields exactly one day.
pub fn days_in(range: &DateRange) -> Vec<NaiveDate> {
    range.start.iter_days().take_while(|day| *day <= range.end).collect()
}

/// Group records by their calendar day
///
/// Record fields are preserved untouched and in-bucket order follows input
/// order. The map iterates in chronological key order.
pub fn bucket_by_date<T, F>(records: &[T], date_of: F) -> BTreeMap<NaiveDate, Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> NaiveDate,
{
    let mut buckets: BTreeMap<NaiveDate, Vec<T>> = BTreeMap::new();
    for record in records {
        buckets.entry(date_of(record)).or_default().push(record.clone());
    }
    buckets
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month, so this cannot fail
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next_month) => next_month - Duration::days(1),
        None => date,
    }
}
