//! Team roster types

use serde::{Deserialize, Serialize};

/// Role of a person on the team
///
/// The application has exactly two roles: a leader who reviews and approves
/// timesheets, and members who submit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Leader,
    Member,
}

/// A person on the team roster
///
/// Created externally (roster import or signup flow); read-only to the
/// reporting core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Team role
    pub role: Role,
}

impl Member {
    /// Create a roster entry
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), name: name.into(), role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_serialization() {
        let member = Member::new("m1", "Alice Wong", Role::Member);

        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains("Alice Wong"));

        let deserialized: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, member);
    }

    #[test]
    fn test_roles_are_distinct() {
        assert_ne!(Role::Leader, Role::Member);
    }
}
