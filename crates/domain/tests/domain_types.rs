//! Integration tests for domain types
//!
//! Covers the record lifecycles and the wire shapes the host application
//! exchanges with the reporting core.

use chrono::{NaiveDate, NaiveTime};
use shiftbook_domain::{
    Member, Role, Task, TaskPriority, TaskStatus, TimesheetEntry, TimesheetStatus,
};

// ============================================================================
// Timesheet Lifecycle Tests
// ============================================================================

/// Full lifecycle of a submitted entry through rejection
///
/// Scenario: a member submits a day, the leader rejects it with a reason, and
/// no further transition is possible
#[test]
fn test_entry_rejection_lifecycle() {
    let mut entry = sample_entry("m1", 8.0);
    assert_eq!(entry.status, TimesheetStatus::Pending);

    entry.reject("Clock span does not match the hours claimed").unwrap();

    assert_eq!(entry.status, TimesheetStatus::Rejected);
    assert!(entry.rejection_reason.is_some());
    assert!(entry.approve().is_err(), "rejected entries must stay rejected");
}

/// Validation runs at the call boundary, before aggregation sees the record
#[test]
fn test_entry_validation_boundary() {
    let valid = sample_entry("m1", 8.0);
    assert!(valid.validate().is_ok());

    let mut negative = sample_entry("m1", 8.0);
    negative.hours = -2.0;
    let err = negative.validate().unwrap_err();
    assert!(err.to_string().contains("Invalid input"));

    let mut orphan = sample_entry("m1", 8.0);
    orphan.member_id = String::new();
    assert!(orphan.validate().is_err());
}

// ============================================================================
// Task Progression Tests
// ============================================================================

/// Tasks only move forward: `Pending -> InProgress -> Completed`
#[test]
fn test_task_progression_is_one_way() {
    let mut task = Task::assign(
        "Fix authentication bug",
        "m1",
        "Development",
        TaskPriority::High,
        NaiveDate::from_ymd_opt(2025, 5, 6),
    );

    task.advance().unwrap();
    task.advance().unwrap();
    assert_eq!(task.status, TaskStatus::Completed);

    let err = task.advance().unwrap_err();
    assert!(err.to_string().contains("Invalid transition"));
}

// ============================================================================
// Wire Shape Tests
// ============================================================================

/// All boundary types survive a JSON round-trip unchanged
#[test]
fn test_wire_round_trips() {
    let member = Member::new("m1", "Alice Wong", Role::Leader);
    let round: Member = serde_json::from_str(&serde_json::to_string(&member).unwrap()).unwrap();
    assert_eq!(round, member);

    let entry = sample_entry("m1", 8.5);
    let round: TimesheetEntry =
        serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
    assert_eq!(round, entry);

    let task = Task::assign("Submit report", "m2", "Documentation", TaskPriority::Low, None);
    let round: Task = serde_json::from_str(&serde_json::to_string(&task).unwrap()).unwrap();
    assert_eq!(round, task);
}

/// Task status uses the app's display labels on the wire
#[test]
fn test_task_status_wire_labels() {
    assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"In Progress\"");
    assert_eq!(serde_json::to_string(&TaskStatus::Pending).unwrap(), "\"Pending\"");
}

// ============================================================================
// Helpers
// ============================================================================

fn sample_entry(member_id: &str, hours: f64) -> TimesheetEntry {
    TimesheetEntry::submit(
        member_id,
        NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        hours,
        "Development",
        "Regular day",
    )
}
