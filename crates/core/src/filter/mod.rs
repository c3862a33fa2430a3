//! Filter engine
//!
//! Predicate-based narrowing of record sets by status, member, and free-text
//! search. Every screen-level filter in the app reduces to the same AND of
//! three optional predicates, so the engine is written once against the
//! [`Filterable`] seam and shared by timesheets and tasks alike.

use serde::{Deserialize, Serialize};
use shiftbook_domain::{Task, TaskStatus, TimesheetEntry};

mod task_view;

pub use task_view::TaskView;

/// Status filter value that matches every record
pub const STATUS_ALL: &str = "All";

/// Criteria for narrowing a record set
///
/// Absent criteria do not filter; present criteria compose with logical AND.
/// There are no error conditions: unmatched criteria simply yield an empty
/// result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact status label to retain; `None` or `"All"` retains everything
    pub status: Option<String>,

    /// Owner (member/assignee) id to retain; `None` retains all members
    pub member_id: Option<String>,

    /// Case-insensitive substring matched against the record's search text;
    /// empty behaves as no filter
    pub search_text: Option<String>,
}

impl FilterCriteria {
    /// Criteria that retain every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a status label
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restrict to one member's records
    pub fn with_member(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    /// Restrict by free-text search
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    fn matches<T: Filterable>(&self, record: &T) -> bool {
        if let Some(status) = self.status.as_deref() {
            if status != STATUS_ALL && record.status_label() != status {
                return false;
            }
        }

        if let Some(member_id) = self.member_id.as_deref() {
            if record.owner_id() != member_id {
                return false;
            }
        }

        if let Some(search) = self.search_text.as_deref() {
            if !search.is_empty() {
                let needle = search.to_lowercase();
                let hit = record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));
                if !hit {
                    return false;
                }
            }
        }

        true
    }
}

/// Seam between the filter engine and concrete record types
///
/// Records expose their status label, owning member id, and the text fields
/// free-text search runs over.
pub trait Filterable {
    /// Display label of the record's status (matched exactly)
    fn status_label(&self) -> &str;

    /// Id of the member the record belongs to
    fn owner_id(&self) -> &str;

    /// Text fields the search predicate scans
    fn search_fields(&self) -> Vec<&str>;
}

impl Filterable for TimesheetEntry {
    fn status_label(&self) -> &str {
        self.status.label()
    }

    fn owner_id(&self) -> &str {
        &self.member_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.category, &self.notes]
    }
}

impl Filterable for Task {
    fn status_label(&self) -> &str {
        self.status.label()
    }

    fn owner_id(&self) -> &str {
        &self.assignee_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.category]
    }
}

/// Apply the criteria, retaining records that match every present predicate
///
/// Order is preserved; the input is never mutated.
pub fn apply<T: Filterable + Clone>(records: &[T], criteria: &FilterCriteria) -> Vec<T> {
    records.iter().filter(|record| criteria.matches(*record)).cloned().collect()
}

/// Filter tasks down to one of the app's task views
///
/// `reference` is the caller-supplied "today"; wall-clock time is never read
/// here.
pub fn apply_task_view(
    tasks: &[Task],
    view: TaskView,
    reference: chrono::NaiveDate,
    due_soon_days: i64,
) -> Vec<Task> {
    let horizon = reference + chrono::Duration::days(due_soon_days);
    tasks
        .iter()
        .filter(|task| match view {
            TaskView::Active => task.status != TaskStatus::Completed,
            TaskView::Completed => task.status == TaskStatus::Completed,
            TaskView::DueSoon => {
                task.status != TaskStatus::Completed
                    && task.due_date.is_some_and(|due| due < horizon)
            }
        })
        .cloned()
        .collect()
}
