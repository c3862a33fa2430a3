//! Grouping and sorting of report rows
//!
//! The review list groups rows under formatted date headers and sorts them by
//! date, name, or logged hours. Sorting is explicitly stable: rows with equal
//! keys keep their original relative order, and regrouping an already grouped
//! and flattened list with the same criteria reproduces it exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shiftbook_domain::constants::GROUP_DATE_FORMAT;
use shiftbook_domain::{TimesheetEntry, TimesheetStatus};
use tracing::warn;

/// Sort criterion for grouped report rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Date,
    Name,
    Hours,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortKey {
    /// The direction each criterion uses by default: newest dates first,
    /// names alphabetical, highest hours first
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Self::Date | Self::Hours => SortDirection::Desc,
            Self::Name => SortDirection::Asc,
        }
    }
}

/// Seam between the grouping engine and concrete row types
pub trait GroupRecord {
    /// Calendar day the record is grouped under
    fn group_date(&self) -> NaiveDate;

    /// Name used for alphabetical sorting
    fn display_name(&self) -> &str;

    /// Logged hours as a numeric value
    fn logged_hours(&self) -> f64;
}

/// A review-list row: one member's submitted day, joined with roster data
///
/// This is the display shape the approve list renders. `hours_logged` is
/// display-formatted text ("8 hrs"); sorting parses its leading numeric
/// token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    /// Id of the underlying timesheet entry
    pub entry_id: String,

    /// Id of the member who submitted the entry
    pub member_id: String,

    /// Member display name
    pub name: String,

    /// Clock span label, e.g. "09:00 - 17:00"
    pub work_hours: String,

    /// Logged hours label, e.g. "8 hrs"
    pub hours_logged: String,

    /// Completed task count shown on the row
    pub tasks_completed: u32,

    /// Review status of the entry
    pub status: TimesheetStatus,

    /// Calendar day of the entry
    pub date: NaiveDate,
}

impl ReviewRow {
    /// Build a row from an entry and the member's display name
    pub fn from_entry(entry: &TimesheetEntry, name: impl Into<String>, tasks_completed: u32) -> Self {
        Self {
            entry_id: entry.id.clone(),
            member_id: entry.member_id.clone(),
            name: name.into(),
            work_hours: format!(
                "{} - {}",
                entry.clock_in.format("%H:%M"),
                entry.clock_out.format("%H:%M")
            ),
            hours_logged: format!("{} hrs", entry.hours),
            tasks_completed,
            status: entry.status,
            date: entry.date,
        }
    }
}

impl crate::filter::Filterable for ReviewRow {
    fn status_label(&self) -> &str {
        self.status.label()
    }

    fn owner_id(&self) -> &str {
        &self.member_id
    }

    // The review list searches by member name
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl GroupRecord for ReviewRow {
    fn group_date(&self) -> NaiveDate {
        self.date
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn logged_hours(&self) -> f64 {
        parse_leading_hours(&self.hours_logged)
    }
}

impl GroupRecord for TimesheetEntry {
    fn group_date(&self) -> NaiveDate {
        self.date
    }

    fn display_name(&self) -> &str {
        &self.member_id
    }

    fn logged_hours(&self) -> f64 {
        self.hours
    }
}

/// Records grouped under one formatted date header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordGroup<T> {
    /// Formatted date header, e.g. "Thu, May 1, 2025"
    pub key: String,

    /// Rows under the header, in sorted order
    pub items: Vec<T>,
}

/// Parse the leading numeric token of display-formatted hours text
///
/// Tolerates non-numeric suffixes ("8 hrs" parses as 8). Text with no
/// leading number falls back to 0 rather than erroring, since this feeds UI
/// sorting, not payroll.
pub fn parse_leading_hours(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let numeric_len = trimmed
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && *c == '-'))
        .count();

    match trimmed[..numeric_len].parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(text, "hours text has no leading numeric token, treating as 0");
            0.0
        }
    }
}

/// Sort records by the criterion, then group them under formatted date keys
///
/// Two records share a group iff their formatted group-key strings are
/// identical. Group order follows the chosen sort (first-encounter order of
/// the sorted rows); in-group order is the order rows were inserted after
/// sorting. The sort is stable, so equal keys preserve input order.
pub fn group_and_sort<T>(
    records: &[T],
    sort: SortKey,
    direction: SortDirection,
) -> Vec<RecordGroup<T>>
where
    T: GroupRecord + Clone,
{
    let mut sorted: Vec<T> = records.to_vec();
    // Reversing the comparator (not the sorted list) keeps the sort stable:
    // equal keys stay in input order either direction
    sorted.sort_by(|a, b| {
        let ord = match sort {
            SortKey::Date => a.group_date().cmp(&b.group_date()),
            SortKey::Name => a.display_name().cmp(b.display_name()),
            // total_cmp gives a total order over f64 without a panic path
            SortKey::Hours => a.logged_hours().total_cmp(&b.logged_hours()),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    let mut groups: Vec<RecordGroup<T>> = Vec::new();
    for record in sorted {
        let key = record.group_date().format(GROUP_DATE_FORMAT).to_string();
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.items.push(record),
            None => groups.push(RecordGroup { key, items: vec![record] }),
        }
    }
    groups
}

/// Group with the criterion's default direction
pub fn group_and_sort_default<T>(records: &[T], sort: SortKey) -> Vec<RecordGroup<T>>
where
    T: GroupRecord + Clone,
{
    group_and_sort(records, sort, sort.default_direction())
}

/// Flatten groups back into a row list, preserving group and in-group order
pub fn flatten<T: Clone>(groups: &[RecordGroup<T>]) -> Vec<T> {
    groups.iter().flat_map(|group| group.items.iter().cloned()).collect()
}
