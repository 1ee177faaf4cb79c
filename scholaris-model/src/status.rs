//! Gender and user-status lookup records, plus status presentation tones.

use serde::{Deserialize, Serialize};

use crate::ids::{GenderId, StatusId};

/// A gender lookup entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gender {
    #[serde(rename = "genderId")]
    pub id: GenderId,
    #[serde(rename = "genderName")]
    pub name: String,
}

/// A user-status lookup entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    #[serde(rename = "statusId")]
    pub id: StatusId,
    #[serde(rename = "statusName")]
    pub name: String,
    pub is_active: bool,
}

impl UserStatus {
    /// Presentation tone for this status's label.
    pub fn tone(&self) -> StatusTone {
        StatusTone::from_label(&self.name)
    }
}

/// Visual category a status label maps to.
///
/// Purely presentational; unrecognized labels fall back to [`StatusTone::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Active,
    Inactive,
    Suspended,
    Other,
}

impl StatusTone {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "active" => StatusTone::Active,
            "inactive" => StatusTone::Inactive,
            "suspended" => StatusTone::Suspended,
            _ => StatusTone::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_matches_known_labels_case_insensitively() {
        assert_eq!(StatusTone::from_label("Active"), StatusTone::Active);
        assert_eq!(StatusTone::from_label("INACTIVE"), StatusTone::Inactive);
        assert_eq!(StatusTone::from_label("suspended"), StatusTone::Suspended);
    }

    #[test]
    fn tone_defaults_to_other() {
        assert_eq!(StatusTone::from_label("Pending"), StatusTone::Other);
        assert_eq!(StatusTone::from_label(""), StatusTone::Other);
    }
}
