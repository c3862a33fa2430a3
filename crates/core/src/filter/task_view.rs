//! Task list views

use serde::{Deserialize, Serialize};

/// The three task-list views the app offers
///
/// `DueSoon` is the urgency view: open tasks whose due date falls within the
/// configured window of the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskView {
    Active,
    Completed,
    DueSoon,
}
