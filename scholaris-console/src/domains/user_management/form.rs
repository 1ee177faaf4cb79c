//! The create/edit form draft.

use thiserror::Error;

use scholaris_api::types::UserInput;
use scholaris_model::{GenderId, SchoolId, StatusId, User};

/// Status assigned to newly created users.
pub const INITIAL_STATUS_ID: StatusId = StatusId(1);

/// Transient, client-only copy of the editable user fields.
///
/// The school id is held as text until submission coerces it; the gender is
/// `None` until the operator picks one. Both gates must pass before a
/// payload is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub school_id: String,
    pub status_id: StatusId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender_id: Option<GenderId>,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            school_id: String::new(),
            status_id: INITIAL_STATUS_ID,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            gender_id: None,
        }
    }
}

/// Required-field gate failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Select a school before submitting")]
    MissingSchool,
    #[error("Select a gender before submitting")]
    MissingGender,
}

impl UserForm {
    /// Populate the draft from an existing record for editing.
    pub fn from_user(user: &User) -> Self {
        Self {
            school_id: user.school_id.to_string(),
            status_id: user.status_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            gender_id: Some(user.gender_id),
        }
    }

    /// Coerce the draft into a mutation payload.
    ///
    /// Fails when school or gender is unselected; other fields are passed
    /// through as typed (the service owns any further validation).
    pub fn to_input(&self) -> Result<UserInput, FormError> {
        let school_id = self
            .school_id
            .trim()
            .parse::<i64>()
            .map(SchoolId)
            .map_err(|_| FormError::MissingSchool)?;
        let gender_id = self.gender_id.ok_or(FormError::MissingGender)?;

        Ok(UserInput {
            school_id,
            status_id: self.status_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            gender_id,
        })
    }
}
