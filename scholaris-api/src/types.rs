//! Request and response types shared with the directory service.

use serde::{Deserialize, Serialize};

use scholaris_model::{GenderId, SchoolId, StatusId, UserId};

/// Standard response envelope returned by every directory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            error: Some(message.into()),
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Editable field set shared by the create and update mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub school_id: SchoolId,
    pub status_id: StatusId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender_id: GenderId,
}

/// Body of `POST /directory/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub input: UserInput,
    pub created_by_user_id: UserId,
}

/// Body of `PUT /directory/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub input: UserInput,
    pub updated_by_user_id: UserId,
}
