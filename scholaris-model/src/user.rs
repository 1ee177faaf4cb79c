//! User records as served by the Remote Directory Service.

use serde::{Deserialize, Serialize};

use crate::ids::{GenderId, SchoolId, StatusId, UserId};

/// A user record.
///
/// The identifier is server-assigned and immutable after creation; school,
/// status, and gender are references into their respective lookup tables and
/// may fail to resolve, in which case the UI degrades to an "Unknown" label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, required for update and delete
    #[serde(rename = "userId")]
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub school_id: SchoolId,
    pub status_id: StatusId,
    pub gender_id: GenderId,
}

impl User {
    /// Display name as rendered in the users table.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: UserId(7),
            first_name: "Amy".to_string(),
            last_name: "Lee".to_string(),
            email: "amy@x.io".to_string(),
            phone: "555-0100".to_string(),
            school_id: SchoolId(1),
            status_id: StatusId(1),
            gender_id: GenderId(2),
        }
    }

    #[test]
    fn display_name_joins_first_and_last() {
        assert_eq!(sample().display_name(), "Amy Lee");
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["userId"], 7);
        assert_eq!(json["firstName"], "Amy");
        assert_eq!(json["schoolId"], 1);
        assert_eq!(json["genderId"], 2);
    }
}
