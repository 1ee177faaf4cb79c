//! The trait seam between the console and the directory service.

use std::sync::Arc;

use async_trait::async_trait;

use scholaris_model::{Gender, School, User, UserId, UserStatus};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::routes::{utils, v1};
use crate::types::{CreateUserRequest, UpdateUserRequest, UserInput};

/// Operations the console consumes from the Remote Directory Service.
///
/// The HTTP adapter below is the production implementation; tests substitute
/// in-memory or mock implementations.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn list_schools(&self) -> Result<Vec<School>, ApiError>;
    async fn list_genders(&self) -> Result<Vec<Gender>, ApiError>;
    async fn list_statuses(&self) -> Result<Vec<UserStatus>, ApiError>;

    /// Create a user; the service assigns the identifier.
    async fn create_user(
        &self,
        input: UserInput,
        created_by: UserId,
    ) -> Result<User, ApiError>;

    /// Replace the editable field set of an existing user.
    async fn update_user(
        &self,
        id: UserId,
        input: UserInput,
        updated_by: UserId,
    ) -> Result<User, ApiError>;

    /// Delete a user; returns the service's success flag.
    async fn delete_user(
        &self,
        id: UserId,
        deleted_by: UserId,
    ) -> Result<bool, ApiError>;
}

/// [`DirectoryService`] adapter over the JSON API.
#[derive(Clone, Debug)]
pub struct HttpDirectoryService {
    client: Arc<ApiClient>,
}

impl HttpDirectoryService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DirectoryService for HttpDirectoryService {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.get(v1::directory::USERS).await
    }

    async fn list_schools(&self) -> Result<Vec<School>, ApiError> {
        self.client.get(v1::directory::SCHOOLS).await
    }

    async fn list_genders(&self) -> Result<Vec<Gender>, ApiError> {
        self.client.get(v1::directory::GENDERS).await
    }

    async fn list_statuses(&self) -> Result<Vec<UserStatus>, ApiError> {
        self.client.get(v1::directory::USER_STATUSES).await
    }

    async fn create_user(
        &self,
        input: UserInput,
        created_by: UserId,
    ) -> Result<User, ApiError> {
        let request = CreateUserRequest {
            input,
            created_by_user_id: created_by,
        };
        self.client.post(v1::directory::USERS, &request).await
    }

    async fn update_user(
        &self,
        id: UserId,
        input: UserInput,
        updated_by: UserId,
    ) -> Result<User, ApiError> {
        let path = utils::replace_param(
            v1::directory::USER_ITEM,
            "{id}",
            id.to_string(),
        );
        let request = UpdateUserRequest {
            input,
            updated_by_user_id: updated_by,
        };
        self.client.put(&path, &request).await
    }

    async fn delete_user(
        &self,
        id: UserId,
        deleted_by: UserId,
    ) -> Result<bool, ApiError> {
        let path = utils::replace_param(
            v1::directory::USER_ITEM,
            "{id}",
            id.to_string(),
        );
        self.client
            .delete(&path, &[("actor", deleted_by.to_string())])
            .await
    }
}
