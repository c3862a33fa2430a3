//! Task types and status progression

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, ShiftBookError};

/// Priority assigned to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// Progress status of a task
///
/// The progression is monotonic: `Pending -> InProgress -> Completed`. There
/// is no defined reverse transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Display label, matching the status chips the app renders
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A task assigned to a team member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier
    pub id: String,

    /// Short task title
    pub title: String,

    /// Id of the member the task is assigned to
    pub assignee_id: String,

    /// Task category (e.g. "Development")
    pub category: String,

    /// Assigned priority
    pub priority: TaskPriority,

    /// Optional due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Progress status
    pub status: TaskStatus,
}

impl Task {
    /// Create a new pending task with a generated id
    pub fn assign(
        title: impl Into<String>,
        assignee_id: impl Into<String>,
        category: impl Into<String>,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            assignee_id: assignee_id.into(),
            category: category.into(),
            priority,
            due_date,
            status: TaskStatus::Pending,
        }
    }

    /// Step the status forward one stage
    ///
    /// `Pending -> InProgress -> Completed`; advancing a completed task is an
    /// `InvalidTransition`.
    pub fn advance(&mut self) -> Result<()> {
        self.status = match self.status {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Completed,
            TaskStatus::Completed => {
                return Err(ShiftBookError::InvalidTransition(format!(
                    "task {} is already completed",
                    self.id
                )));
            }
        };
        Ok(())
    }

    /// Whether the task still needs work
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Completed
    }
}
