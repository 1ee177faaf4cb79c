//! Executes directory effects on the tokio runtime.
//!
//! The shell's update loop is synchronous; every network operation a domain
//! update requests is spawned here and its settlement is sent back through
//! the message channel.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use scholaris_api::DirectoryService;

use crate::common::messages::{
    AppMessage, DirectoryCommand, Effect, UpdateIntent,
};
use crate::domains::user_management::messages::Message;

/// Spawns effects and routes their settlements back as messages.
pub struct EffectRuntime {
    handle: tokio::runtime::Handle,
    service: Arc<dyn DirectoryService>,
    tx: UnboundedSender<AppMessage>,
}

impl std::fmt::Debug for EffectRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRuntime").finish()
    }
}

impl EffectRuntime {
    pub fn new(
        handle: tokio::runtime::Handle,
        service: Arc<dyn DirectoryService>,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            handle,
            service,
            tx,
        }
    }

    /// Execute each effect in the background; settlements arrive on the
    /// message channel in completion order.
    pub fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            let Effect::Directory(command) = effect;
            let service = self.service.clone();
            let tx = self.tx.clone();
            let _task = self.handle.spawn(async move {
                let message = perform(service.as_ref(), command).await;
                if tx.send(message).is_err() {
                    warn!("Message channel closed before settlement arrived");
                }
            });
        }
    }
}

/// Run one directory command to completion and produce its settlement.
pub async fn perform(
    service: &dyn DirectoryService,
    command: DirectoryCommand,
) -> AppMessage {
    match command {
        DirectoryCommand::LoadUsers => {
            let result =
                service.list_users().await.map_err(|e| e.to_string());
            Message::UsersLoaded(result).into()
        }
        DirectoryCommand::LoadSchools => {
            let result =
                service.list_schools().await.map_err(|e| e.to_string());
            Message::SchoolsLoaded(result).into()
        }
        DirectoryCommand::LoadGenders => {
            let result =
                service.list_genders().await.map_err(|e| e.to_string());
            Message::GendersLoaded(result).into()
        }
        DirectoryCommand::LoadStatuses => {
            let result =
                service.list_statuses().await.map_err(|e| e.to_string());
            Message::StatusesLoaded(result).into()
        }
        DirectoryCommand::CreateUser { input, created_by } => {
            match service.create_user(input, created_by).await {
                Ok(user) => Message::CreateUserSuccess(user).into(),
                Err(error) => {
                    Message::CreateUserError(error.to_string()).into()
                }
            }
        }
        DirectoryCommand::UpdateUser {
            id,
            input,
            updated_by,
            intent,
        } => {
            let result = service.update_user(id, input, updated_by).await;
            match (intent, result) {
                (UpdateIntent::EditForm, Ok(user)) => {
                    Message::UpdateUserSuccess(user).into()
                }
                (UpdateIntent::EditForm, Err(error)) => {
                    Message::UpdateUserError(error.to_string()).into()
                }
                (UpdateIntent::StatusMenu, Ok(user)) => {
                    Message::StatusChangeSuccess(user).into()
                }
                (UpdateIntent::StatusMenu, Err(error)) => {
                    Message::StatusChangeError(error.to_string()).into()
                }
            }
        }
        DirectoryCommand::DeleteUser { id, deleted_by } => {
            match service.delete_user(id, deleted_by).await {
                Ok(true) => Message::DeleteUserSuccess(id).into(),
                Ok(false) => Message::DeleteUserError(
                    "The directory declined the delete".to_string(),
                )
                .into(),
                Err(error) => {
                    Message::DeleteUserError(error.to_string()).into()
                }
            }
        }
    }
}
