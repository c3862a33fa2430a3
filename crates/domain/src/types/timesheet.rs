//! Timesheet entry types and lifecycle
//!
//! An entry is created when a member submits their day, then moves through a
//! single terminal review transition: `Pending -> Approved | Rejected`. No
//! other mutation is defined; edits before submission happen outside this
//! core (drafts are a presentation concern).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, ShiftBookError};

/// Review status of a submitted timesheet entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimesheetStatus {
    Pending,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    /// Display label, matching the status chips the app renders
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single submitted timesheet entry
///
/// # Field Invariants
/// - `hours` is non-negative and is the authoritative logged value; it is NOT
///   recomputed from `clock_out - clock_in`. Reconciling the two is a policy
///   decision for the system of record, not this layer.
/// - `rejection_reason` is only meaningful when `status` is `Rejected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// Unique entry identifier
    pub id: String,

    /// Id of the member who logged the time
    pub member_id: String,

    /// Calendar day the time was worked
    pub date: NaiveDate,

    /// Clock-in time of day
    pub clock_in: NaiveTime,

    /// Clock-out time of day
    pub clock_out: NaiveTime,

    /// Logged hours (authoritative, see invariants)
    pub hours: f64,

    /// Review status
    pub status: TimesheetStatus,

    /// Task category the hours were spent on (e.g. "Development")
    pub category: String,

    /// Free-text notes from the member
    pub notes: String,

    /// Reviewer-supplied reason, set on rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl TimesheetEntry {
    /// Create a new pending entry with a generated id
    ///
    /// This is the submission constructor: entries enter the system as
    /// `Pending` with no rejection reason.
    #[allow(clippy::too_many_arguments)]
    pub fn submit(
        member_id: impl Into<String>,
        date: NaiveDate,
        clock_in: NaiveTime,
        clock_out: NaiveTime,
        hours: f64,
        category: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_id: member_id.into(),
            date,
            clock_in,
            clock_out,
            hours,
            status: TimesheetStatus::Pending,
            category: category.into(),
            notes: notes.into(),
            rejection_reason: None,
        }
    }

    /// Validate the record shape at the call boundary
    ///
    /// Fails fast with `InvalidInput` rather than letting malformed records
    /// flow into aggregation. A mismatch between `hours` and the clock span
    /// is tolerated (see field invariants); an inverted clock span is not.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(ShiftBookError::InvalidInput("timesheet entry id is empty".into()));
        }
        if self.member_id.is_empty() {
            return Err(ShiftBookError::InvalidInput(format!(
                "timesheet entry {} has no member id",
                self.id
            )));
        }
        if self.hours < 0.0 || !self.hours.is_finite() {
            return Err(ShiftBookError::InvalidInput(format!(
                "timesheet entry {} has invalid hours {}",
                self.id, self.hours
            )));
        }
        if self.clock_out < self.clock_in {
            return Err(ShiftBookError::InvalidInput(format!(
                "timesheet entry {} clocks out before clocking in",
                self.id
            )));
        }
        Ok(())
    }

    /// Approve a pending entry
    ///
    /// The review transition is terminal: approving anything but a `Pending`
    /// entry is an `InvalidTransition`.
    pub fn approve(&mut self) -> Result<()> {
        match self.status {
            TimesheetStatus::Pending => {
                self.status = TimesheetStatus::Approved;
                Ok(())
            }
            other => Err(ShiftBookError::InvalidTransition(format!(
                "cannot approve entry {} in status {other}",
                self.id
            ))),
        }
    }

    /// Reject a pending entry with a reviewer-supplied reason
    pub fn reject(&mut self, reason: impl Into<String>) -> Result<()> {
        match self.status {
            TimesheetStatus::Pending => {
                self.status = TimesheetStatus::Rejected;
                self.rejection_reason = Some(reason.into());
                Ok(())
            }
            other => Err(ShiftBookError::InvalidTransition(format!(
                "cannot reject entry {} in status {other}",
                self.id
            ))),
        }
    }
}
