//! Message routing and effect descriptions.
//!
//! Domain updates are pure: they mutate state and return a
//! [`DomainUpdateResult`] describing the network work to perform. The shell
//! hands each [`Effect`] to the runtime, which executes it and feeds the
//! settlement back in as another [`AppMessage`].

use scholaris_api::types::UserInput;
use scholaris_model::UserId;

use crate::domains::user_management;

/// The main domain message router
#[derive(Clone, Debug)]
pub enum AppMessage {
    /// User management domain
    UserManagement(user_management::messages::Message),

    /// No-op placeholder for handlers that produce nothing
    NoOp,
}

impl From<user_management::messages::Message> for AppMessage {
    fn from(msg: user_management::messages::Message) -> Self {
        AppMessage::UserManagement(msg)
    }
}

impl AppMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserManagement(msg) => msg.name(),
            Self::NoOp => "AppMessage::NoOp",
        }
    }
}

/// Side effect requested by a domain update
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Issue an operation against the Remote Directory Service
    Directory(DirectoryCommand),
}

impl From<DirectoryCommand> for Effect {
    fn from(command: DirectoryCommand) -> Self {
        Effect::Directory(command)
    }
}

/// Which settlement messages an update mutation should produce.
///
/// Changing a user's status reuses the generic update operation, but its
/// settlement feeds a different notice than an edit-form submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateIntent {
    EditForm,
    StatusMenu,
}

/// A single operation against the directory service
#[derive(Clone, Debug, PartialEq)]
pub enum DirectoryCommand {
    LoadUsers,
    LoadSchools,
    LoadGenders,
    LoadStatuses,
    CreateUser {
        input: UserInput,
        created_by: UserId,
    },
    UpdateUser {
        id: UserId,
        input: UserInput,
        updated_by: UserId,
        intent: UpdateIntent,
    },
    DeleteUser {
        id: UserId,
        deleted_by: UserId,
    },
}

/// Result of a domain update operation
#[derive(Debug, Default)]
pub struct DomainUpdateResult {
    /// Effects for the runtime to execute
    pub effects: Vec<Effect>,
}

impl DomainUpdateResult {
    /// Create an empty result (no effects)
    pub fn none() -> Self {
        Self::default()
    }

    /// Create a result with a single effect
    pub fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
        }
    }

    /// Create a result with several effects
    pub fn effects(effects: Vec<Effect>) -> Self {
        Self { effects }
    }

    /// Shorthand for a single directory command
    pub fn command(command: DirectoryCommand) -> Self {
        Self::effect(Effect::Directory(command))
    }
}
