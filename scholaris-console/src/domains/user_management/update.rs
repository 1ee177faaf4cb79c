//! Message handling for the user management page.
//!
//! Every command handler follows the same three phases: pre-flight (the
//! delete confirmation, the required-field gate), execution (busy marker set,
//! mutation effect emitted), and settlement (notice raised, transient state
//! cleared on success, left intact on failure, user list refetched on
//! success).

use tracing::{debug, info, warn};

use scholaris_api::types::UserInput;

use crate::common::messages::{
    DirectoryCommand, DomainUpdateResult, UpdateIntent,
};
use crate::notify::Notice;

use super::form::{INITIAL_STATUS_ID, UserForm};
use super::messages::Message;
use super::view_model::find_user;
use super::{BusyIndicator, PageMode, UserManagementState};

/// Handle user management domain messages
pub fn update_user_management(
    state: &mut UserManagementState,
    message: Message,
) -> DomainUpdateResult {
    debug!("User management update: {}", message.name());

    // Mutations are serialized: while one is in flight, operator intents are
    // dropped and only query/mutation settlements pass through.
    if state.busy.is_some() && message.is_intent() {
        debug!("Dropping {} while a mutation is in flight", message.name());
        return DomainUpdateResult::none();
    }

    match message {
        // Directory queries
        Message::LoadDirectory => {
            info!("Loading directory data from server");
            DomainUpdateResult::effects(vec![
                DirectoryCommand::LoadUsers.into(),
                DirectoryCommand::LoadSchools.into(),
                DirectoryCommand::LoadGenders.into(),
                DirectoryCommand::LoadStatuses.into(),
            ])
        }

        Message::UsersLoaded(result) => {
            match &result {
                Ok(users) => info!("Loaded {} users", users.len()),
                Err(error) => warn!("Failed to load users: {error}"),
            }
            state.queries.users.settle(result);
            DomainUpdateResult::none()
        }

        Message::SchoolsLoaded(result) => {
            state.queries.schools.settle(result);
            DomainUpdateResult::none()
        }

        Message::GendersLoaded(result) => {
            state.queries.genders.settle(result);
            DomainUpdateResult::none()
        }

        Message::StatusesLoaded(result) => {
            state.queries.statuses.settle(result);
            DomainUpdateResult::none()
        }

        // Table search
        Message::SearchChanged(term) => {
            state.search = term;
            DomainUpdateResult::none()
        }

        // Shared create/edit form fields
        Message::FormSchoolChanged(school) => {
            state.form.school_id = school;
            DomainUpdateResult::none()
        }
        Message::FormStatusChanged(status) => {
            state.form.status_id = status;
            DomainUpdateResult::none()
        }
        Message::FormFirstNameChanged(first_name) => {
            state.form.first_name = first_name;
            DomainUpdateResult::none()
        }
        Message::FormLastNameChanged(last_name) => {
            state.form.last_name = last_name;
            DomainUpdateResult::none()
        }
        Message::FormEmailChanged(email) => {
            state.form.email = email;
            DomainUpdateResult::none()
        }
        Message::FormPhoneChanged(phone) => {
            state.form.phone = phone;
            DomainUpdateResult::none()
        }
        Message::FormGenderChanged(gender) => {
            state.form.gender_id = Some(gender);
            DomainUpdateResult::none()
        }

        // User creation
        Message::CreateUser => {
            if state.mode != PageMode::Idle {
                debug!("Ignoring create intent while a dialog is open");
                return DomainUpdateResult::none();
            }
            info!("Starting user creation flow");
            state.form = UserForm::default();
            state.mode = PageMode::Creating;
            DomainUpdateResult::none()
        }

        Message::CreateUserFormSubmit => {
            if state.mode != PageMode::Creating {
                return DomainUpdateResult::none();
            }
            match state.form.to_input() {
                Ok(mut input) => {
                    // New users always start in the initial status.
                    input.status_id = INITIAL_STATUS_ID;
                    info!("Submitting create user form");
                    state.busy = Some(BusyIndicator {
                        label: "Creating user...",
                    });
                    DomainUpdateResult::command(DirectoryCommand::CreateUser {
                        input,
                        created_by: state.operator,
                    })
                }
                Err(gate) => {
                    debug!("Create submit rejected: {gate}");
                    state.notice = Some(Notice::error("Error", gate.to_string()));
                    DomainUpdateResult::none()
                }
            }
        }

        Message::CreateUserSuccess(user) => {
            info!("User created successfully: {}", user.display_name());
            state.busy = None;
            state.mode = PageMode::Idle;
            state.form = UserForm::default();
            state.notice = Some(Notice::success("User created successfully"));
            DomainUpdateResult::command(DirectoryCommand::LoadUsers)
        }

        Message::CreateUserError(error) => {
            warn!("Failed to create user: {error}");
            state.busy = None;
            state.notice = Some(Notice::error("Error", error));
            DomainUpdateResult::none()
        }

        Message::CreateUserCancel => {
            if state.mode == PageMode::Creating {
                info!("User creation cancelled");
                state.mode = PageMode::Idle;
                state.form = UserForm::default();
            }
            DomainUpdateResult::none()
        }

        // User updates
        Message::UpdateUser(user_id) => {
            if state.mode != PageMode::Idle {
                debug!("Ignoring edit intent while a dialog is open");
                return DomainUpdateResult::none();
            }
            let Some(user) = find_user(state.queries.users.items(), user_id)
            else {
                warn!("Edit requested for unknown user {user_id}");
                return DomainUpdateResult::none();
            };
            info!("Starting user update flow for: {user_id}");
            state.form = UserForm::from_user(user);
            state.mode = PageMode::Editing(user_id);
            DomainUpdateResult::none()
        }

        Message::UpdateUserFormSubmit => {
            let PageMode::Editing(user_id) = state.mode else {
                return DomainUpdateResult::none();
            };
            match state.form.to_input() {
                Ok(input) => {
                    info!("Submitting user update form for {user_id}");
                    state.busy = Some(BusyIndicator {
                        label: "Updating user...",
                    });
                    DomainUpdateResult::command(DirectoryCommand::UpdateUser {
                        id: user_id,
                        input,
                        updated_by: state.operator,
                        intent: UpdateIntent::EditForm,
                    })
                }
                Err(gate) => {
                    debug!("Update submit rejected: {gate}");
                    state.notice = Some(Notice::error("Error", gate.to_string()));
                    DomainUpdateResult::none()
                }
            }
        }

        Message::UpdateUserSuccess(user) => {
            info!("User updated successfully: {}", user.display_name());
            state.busy = None;
            state.mode = PageMode::Idle;
            state.form = UserForm::default();
            state.notice = Some(Notice::success("User updated successfully"));
            DomainUpdateResult::command(DirectoryCommand::LoadUsers)
        }

        Message::UpdateUserError(error) => {
            warn!("Failed to update user: {error}");
            state.busy = None;
            state.notice = Some(Notice::error("Update failed", error));
            DomainUpdateResult::none()
        }

        Message::UpdateUserCancel => {
            if matches!(state.mode, PageMode::Editing(_)) {
                info!("User update cancelled");
                state.mode = PageMode::Idle;
                state.form = UserForm::default();
            }
            DomainUpdateResult::none()
        }

        // User deletion
        Message::DeleteUser(user_id) => {
            if state.mode != PageMode::Idle {
                debug!("Ignoring delete intent while a dialog is open");
                return DomainUpdateResult::none();
            }
            info!("Requesting delete confirmation for: {user_id}");
            state.mode = PageMode::ConfirmingDelete(user_id);
            DomainUpdateResult::none()
        }

        Message::DeleteUserConfirm => {
            let PageMode::ConfirmingDelete(user_id) = state.mode else {
                return DomainUpdateResult::none();
            };
            info!("Deleting user: {user_id}");
            state.busy = Some(BusyIndicator {
                label: "Deleting user...",
            });
            DomainUpdateResult::command(DirectoryCommand::DeleteUser {
                id: user_id,
                deleted_by: state.operator,
            })
        }

        Message::DeleteUserCancel => {
            if matches!(state.mode, PageMode::ConfirmingDelete(_)) {
                info!("User deletion cancelled");
                state.mode = PageMode::Idle;
            }
            DomainUpdateResult::none()
        }

        Message::DeleteUserSuccess(user_id) => {
            info!("User deleted successfully: {user_id}");
            state.busy = None;
            state.mode = PageMode::Idle;
            state.notice = Some(Notice::success("User deleted successfully"));
            DomainUpdateResult::command(DirectoryCommand::LoadUsers)
        }

        Message::DeleteUserError(error) => {
            warn!("Failed to delete user: {error}");
            state.busy = None;
            // The pending selection clears when the mutation settles either
            // way; the operator re-issues the intent to retry.
            state.mode = PageMode::Idle;
            state.notice = Some(Notice::error("Delete failed", error));
            DomainUpdateResult::none()
        }

        // Inline status menu
        Message::ToggleStatusMenu(user_id) => {
            if state.mode != PageMode::Idle {
                return DomainUpdateResult::none();
            }
            state.status_menu = if state.status_menu == Some(user_id) {
                None
            } else {
                Some(user_id)
            };
            DomainUpdateResult::none()
        }

        Message::SelectStatus { user, status } => {
            // The menu closes as soon as a choice is made, whatever the
            // mutation's outcome.
            state.status_menu = None;
            let Some(record) = find_user(state.queries.users.items(), user)
            else {
                warn!("Status change requested for unknown user {user}");
                return DomainUpdateResult::none();
            };
            info!("Changing status of {user} to {status}");
            // No dedicated status operation exists; echo the record's other
            // fields through the generic update.
            let input = UserInput {
                school_id: record.school_id,
                status_id: status,
                first_name: record.first_name.clone(),
                last_name: record.last_name.clone(),
                email: record.email.clone(),
                phone: record.phone.clone(),
                gender_id: record.gender_id,
            };
            state.busy = Some(BusyIndicator {
                label: "Updating status...",
            });
            DomainUpdateResult::command(DirectoryCommand::UpdateUser {
                id: user,
                input,
                updated_by: state.operator,
                intent: UpdateIntent::StatusMenu,
            })
        }

        Message::StatusChangeSuccess(user) => {
            info!("Status updated for {}", user.display_name());
            state.busy = None;
            state.notice = Some(Notice::success("Status updated"));
            DomainUpdateResult::command(DirectoryCommand::LoadUsers)
        }

        Message::StatusChangeError(error) => {
            warn!("Failed to update status: {error}");
            state.busy = None;
            state.notice = Some(Notice::error("Error", error));
            DomainUpdateResult::none()
        }

        // Notices
        Message::DismissNotice => {
            state.notice = None;
            DomainUpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::messages::Effect;
    use crate::notify::NoticeKind;
    use crate::query::QueryState;
    use scholaris_model::{GenderId, SchoolId, StatusId, User, UserId};

    fn user(id: i64, first: &str, last: &str, email: &str) -> User {
        User {
            id: UserId(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: format!("555-01{id:02}"),
            school_id: SchoolId(3),
            status_id: StatusId(2),
            gender_id: GenderId(1),
        }
    }

    fn state_with_users(users: Vec<User>) -> UserManagementState {
        let mut state = UserManagementState::new(UserId(9));
        state.queries.users = QueryState::Ready(users);
        state
    }

    fn single_command(result: DomainUpdateResult) -> DirectoryCommand {
        assert_eq!(result.effects.len(), 1, "expected exactly one effect");
        let Effect::Directory(command) = result.effects.into_iter().next().unwrap();
        command
    }

    #[test]
    fn create_intent_opens_dialog_with_fresh_draft() {
        let mut state = state_with_users(vec![]);
        state.form.first_name = "Stale".to_string();

        let result =
            update_user_management(&mut state, Message::CreateUser);

        assert!(result.effects.is_empty());
        assert_eq!(state.mode, PageMode::Creating);
        assert_eq!(state.form, UserForm::default());
    }

    #[test]
    fn create_submit_without_school_or_gender_issues_no_mutation() {
        let mut state = state_with_users(vec![]);
        update_user_management(&mut state, Message::CreateUser);
        update_user_management(
            &mut state,
            Message::FormFirstNameChanged("Amy".to_string()),
        );

        let result =
            update_user_management(&mut state, Message::CreateUserFormSubmit);

        assert!(result.effects.is_empty());
        assert!(state.busy.is_none());
        assert_eq!(state.mode, PageMode::Creating);
        assert_eq!(
            state.notice.as_ref().map(|n| n.kind),
            Some(NoticeKind::Error)
        );
    }

    #[test]
    fn create_submit_forces_initial_status_and_carries_operator() {
        let mut state = state_with_users(vec![]);
        update_user_management(&mut state, Message::CreateUser);
        for message in [
            Message::FormSchoolChanged("3".to_string()),
            Message::FormStatusChanged(StatusId(4)),
            Message::FormFirstNameChanged("Amy".to_string()),
            Message::FormLastNameChanged("Lee".to_string()),
            Message::FormEmailChanged("amy@x.io".to_string()),
            Message::FormPhoneChanged("555-0100".to_string()),
            Message::FormGenderChanged(GenderId(2)),
        ] {
            update_user_management(&mut state, message);
        }

        let result =
            update_user_management(&mut state, Message::CreateUserFormSubmit);

        let DirectoryCommand::CreateUser { input, created_by } =
            single_command(result)
        else {
            panic!("expected a create command");
        };
        assert_eq!(input.status_id, INITIAL_STATUS_ID);
        assert_eq!(input.school_id, SchoolId(3));
        assert_eq!(created_by, UserId(9));
        assert!(state.busy.is_some());
    }

    #[test]
    fn create_settlement_closes_dialog_and_refetches() {
        let mut state = state_with_users(vec![]);
        state.mode = PageMode::Creating;
        state.busy = Some(BusyIndicator { label: "Creating user..." });

        let result = update_user_management(
            &mut state,
            Message::CreateUserSuccess(user(5, "Amy", "Lee", "amy@x.io")),
        );

        assert_eq!(
            single_command(result),
            DirectoryCommand::LoadUsers,
            "successful create refetches the list"
        );
        assert_eq!(state.mode, PageMode::Idle);
        assert!(state.busy.is_none());
        assert_eq!(
            state.notice.as_ref().map(|n| n.kind),
            Some(NoticeKind::Success)
        );
    }

    #[test]
    fn edit_intent_populates_draft_from_record() {
        let target = user(2, "Ben", "Li", "ben@x.io");
        let mut state = state_with_users(vec![
            user(1, "Amy", "Lee", "amy@x.io"),
            target.clone(),
        ]);

        update_user_management(&mut state, Message::UpdateUser(UserId(2)));

        assert_eq!(state.mode, PageMode::Editing(UserId(2)));
        assert_eq!(state.form, UserForm::from_user(&target));
    }

    #[test]
    fn unchanged_edit_submit_echoes_current_values() {
        let target = user(2, "Ben", "Li", "ben@x.io");
        let mut state = state_with_users(vec![target.clone()]);
        update_user_management(&mut state, Message::UpdateUser(UserId(2)));

        let result =
            update_user_management(&mut state, Message::UpdateUserFormSubmit);

        let DirectoryCommand::UpdateUser { id, input, intent, .. } =
            single_command(result)
        else {
            panic!("expected an update command");
        };
        assert_eq!(id, UserId(2));
        assert_eq!(intent, UpdateIntent::EditForm);
        assert_eq!(input.school_id, target.school_id);
        assert_eq!(input.status_id, target.status_id);
        assert_eq!(input.first_name, target.first_name);
        assert_eq!(input.last_name, target.last_name);
        assert_eq!(input.email, target.email);
        assert_eq!(input.phone, target.phone);
        assert_eq!(input.gender_id, target.gender_id);
    }

    #[test]
    fn failed_update_keeps_dialog_and_draft_without_refetch() {
        let target = user(2, "Ben", "Li", "ben@x.io");
        let mut state = state_with_users(vec![target.clone()]);
        update_user_management(&mut state, Message::UpdateUser(UserId(2)));
        update_user_management(&mut state, Message::UpdateUserFormSubmit);
        let draft = state.form.clone();

        let result = update_user_management(
            &mut state,
            Message::UpdateUserError("email already in use".to_string()),
        );

        assert!(result.effects.is_empty(), "failure must not refetch");
        assert_eq!(state.mode, PageMode::Editing(UserId(2)));
        assert_eq!(state.form, draft);
        assert!(state.busy.is_none());
        let notice = state.notice.expect("error notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.body.as_deref(), Some("email already in use"));
    }

    #[test]
    fn declined_delete_issues_no_mutation_and_resets_mode() {
        let mut state = state_with_users(vec![user(1, "Amy", "Lee", "amy@x.io")]);
        update_user_management(&mut state, Message::DeleteUser(UserId(1)));
        assert_eq!(state.mode, PageMode::ConfirmingDelete(UserId(1)));

        let result =
            update_user_management(&mut state, Message::DeleteUserCancel);

        assert!(result.effects.is_empty());
        assert_eq!(state.mode, PageMode::Idle);
        assert!(state.busy.is_none());
        assert!(state.notice.is_none());
    }

    #[test]
    fn confirmed_delete_dispatches_mutation_then_settles_idle() {
        let mut state = state_with_users(vec![user(1, "Amy", "Lee", "amy@x.io")]);
        update_user_management(&mut state, Message::DeleteUser(UserId(1)));

        let result =
            update_user_management(&mut state, Message::DeleteUserConfirm);
        let DirectoryCommand::DeleteUser { id, deleted_by } =
            single_command(result)
        else {
            panic!("expected a delete command");
        };
        assert_eq!(id, UserId(1));
        assert_eq!(deleted_by, UserId(9));
        assert!(state.busy.is_some());

        let settled = update_user_management(
            &mut state,
            Message::DeleteUserSuccess(UserId(1)),
        );
        assert_eq!(single_command(settled), DirectoryCommand::LoadUsers);
        assert_eq!(state.mode, PageMode::Idle);
        assert!(state.busy.is_none());
    }

    #[test]
    fn status_change_echoes_non_status_fields() {
        let target = user(2, "Ben", "Li", "ben@x.io");
        let mut state = state_with_users(vec![target.clone()]);
        update_user_management(
            &mut state,
            Message::ToggleStatusMenu(UserId(2)),
        );
        assert_eq!(state.status_menu, Some(UserId(2)));

        let result = update_user_management(
            &mut state,
            Message::SelectStatus {
                user: UserId(2),
                status: StatusId(3),
            },
        );

        assert_eq!(state.status_menu, None, "menu closes on selection");
        let DirectoryCommand::UpdateUser { id, input, intent, .. } =
            single_command(result)
        else {
            panic!("expected an update command");
        };
        assert_eq!(id, UserId(2));
        assert_eq!(intent, UpdateIntent::StatusMenu);
        assert_eq!(input.status_id, StatusId(3));
        assert_eq!(input.first_name, target.first_name);
        assert_eq!(input.email, target.email);
        assert_eq!(input.school_id, target.school_id);
        assert_eq!(input.gender_id, target.gender_id);
    }

    #[test]
    fn intents_are_dropped_while_a_mutation_is_in_flight() {
        let mut state = state_with_users(vec![user(1, "Amy", "Lee", "amy@x.io")]);
        state.busy = Some(BusyIndicator { label: "Updating user..." });

        let result =
            update_user_management(&mut state, Message::DeleteUser(UserId(1)));

        assert!(result.effects.is_empty());
        assert_eq!(state.mode, PageMode::Idle);
    }

    #[test]
    fn failed_initial_query_is_terminal_for_the_table() {
        let mut state = state_with_users(vec![]);
        state.queries.users = QueryState::Loading;

        update_user_management(
            &mut state,
            Message::UsersLoaded(Err("connection refused".to_string())),
        );

        assert_eq!(
            state.queries.users.failed(),
            Some("connection refused")
        );
    }
}
