//! User management domain
//!
//! The one page that talks to a real backend: lists directory users, and
//! creates, edits, deletes, and re-statuses them through the directory
//! service. All transient UI state for the page lives here.

pub mod form;
pub mod messages;
pub mod update;
pub mod view_model;

use scholaris_model::UserId;

use crate::notify::Notice;
use crate::query::DirectoryQueries;

use self::form::UserForm;

/// Which dialog, if any, the page has open.
///
/// A single tagged mode replaces independent open/closed flags so that two
/// dialogs can never be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Idle,
    Creating,
    Editing(UserId),
    ConfirmingDelete(UserId),
}

/// Non-dismissable progress indicator for an in-flight mutation.
///
/// While set, every new command intent is dropped; mutations are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyIndicator {
    pub label: &'static str,
}

/// User management domain state
#[derive(Debug)]
pub struct UserManagementState {
    /// Operator identity stamped on every mutation
    pub operator: UserId,
    /// Query slots for users plus the three lookup tables
    pub queries: DirectoryQueries,
    /// Live search term over display name and email
    pub search: String,
    /// Open dialog, if any
    pub mode: PageMode,
    /// Draft of the create/edit form
    pub form: UserForm,
    /// User whose inline status menu is open, if any
    pub status_menu: Option<UserId>,
    /// In-flight mutation marker
    pub busy: Option<BusyIndicator>,
    /// Settlement feedback banner
    pub notice: Option<Notice>,
}

impl UserManagementState {
    pub fn new(operator: UserId) -> Self {
        Self {
            operator,
            queries: DirectoryQueries::default(),
            search: String::new(),
            mode: PageMode::Idle,
            form: UserForm::default(),
            status_menu: None,
            busy: None,
            notice: None,
        }
    }
}
