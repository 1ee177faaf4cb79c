//! Payload assembly across the service seam, verified with mock
//! expectations: the coerced school id, the forced initial status on
//! create, and the configured operator identity on every mutation.

mod support;

use async_trait::async_trait;
use mockall::predicate;

use scholaris_api::types::UserInput;
use scholaris_api::{ApiError, DirectoryService};
use scholaris_console::domains::user_management::UserManagementState;
use scholaris_console::domains::user_management::form::INITIAL_STATUS_ID;
use scholaris_console::domains::user_management::messages::Message;
use scholaris_console::query::QueryState;
use scholaris_model::{
    Gender, GenderId, School, SchoolId, StatusId, User, UserId, UserStatus,
};

use support::{drive, user};

mockall::mock! {
    pub Directory {}

    #[async_trait]
    impl DirectoryService for Directory {
        async fn list_users(&self) -> Result<Vec<User>, ApiError>;
        async fn list_schools(&self) -> Result<Vec<School>, ApiError>;
        async fn list_genders(&self) -> Result<Vec<Gender>, ApiError>;
        async fn list_statuses(&self) -> Result<Vec<UserStatus>, ApiError>;
        async fn create_user(
            &self,
            input: UserInput,
            created_by: UserId,
        ) -> Result<User, ApiError>;
        async fn update_user(
            &self,
            id: UserId,
            input: UserInput,
            updated_by: UserId,
        ) -> Result<User, ApiError>;
        async fn delete_user(
            &self,
            id: UserId,
            deleted_by: UserId,
        ) -> Result<bool, ApiError>;
    }
}

fn state_with_users(operator: i64, users: Vec<User>) -> UserManagementState {
    let mut state = UserManagementState::new(UserId(operator));
    state.queries.users = QueryState::Ready(users);
    state
}

#[tokio::test]
async fn create_payload_coerces_school_and_forces_initial_status() {
    let mut service = MockDirectory::new();
    service
        .expect_create_user()
        .withf(|input, created_by| {
            input.school_id == SchoolId(3)
                && input.status_id == INITIAL_STATUS_ID
                && input.gender_id == GenderId(2)
                && input.first_name == "Amy"
                && *created_by == UserId(7)
        })
        .times(1)
        .returning(|input, _| {
            Ok(User {
                id: UserId(10),
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                phone: input.phone,
                school_id: input.school_id,
                status_id: input.status_id,
                gender_id: input.gender_id,
            })
        });
    // Settlement refetches the list.
    service
        .expect_list_users()
        .times(1)
        .returning(|| Ok(Vec::new()));

    let mut state = state_with_users(7, vec![]);
    drive(&mut state, &service, Message::CreateUser).await;
    for message in [
        Message::FormSchoolChanged(" 3 ".to_string()),
        // A stale status choice in the draft must not leak into creation.
        Message::FormStatusChanged(StatusId(4)),
        Message::FormFirstNameChanged("Amy".to_string()),
        Message::FormLastNameChanged("Lee".to_string()),
        Message::FormEmailChanged("amy@x.io".to_string()),
        Message::FormPhoneChanged("555-0100".to_string()),
        Message::FormGenderChanged(GenderId(2)),
    ] {
        drive(&mut state, &service, message).await;
    }

    drive(&mut state, &service, Message::CreateUserFormSubmit).await;
}

#[tokio::test]
async fn delete_carries_target_and_operator_ids() {
    let mut service = MockDirectory::new();
    service
        .expect_delete_user()
        .with(predicate::eq(UserId(5)), predicate::eq(UserId(7)))
        .times(1)
        .returning(|_, _| Ok(true));
    service
        .expect_list_users()
        .times(1)
        .returning(|| Ok(Vec::new()));

    let mut state =
        state_with_users(7, vec![user(5, "Amy", "Lee", "amy@x.io")]);
    drive(&mut state, &service, Message::DeleteUser(UserId(5))).await;
    drive(&mut state, &service, Message::DeleteUserConfirm).await;
}

#[tokio::test]
async fn declined_confirmation_never_touches_the_service() {
    // No expectations registered: any call would panic the mock.
    let service = MockDirectory::new();

    let mut state =
        state_with_users(7, vec![user(5, "Amy", "Lee", "amy@x.io")]);
    drive(&mut state, &service, Message::DeleteUser(UserId(5))).await;
    drive(&mut state, &service, Message::DeleteUserCancel).await;
}

#[tokio::test]
async fn declined_delete_flag_settles_as_failure() {
    let mut service = MockDirectory::new();
    service
        .expect_delete_user()
        .times(1)
        .returning(|_, _| Ok(false));

    let mut state =
        state_with_users(7, vec![user(5, "Amy", "Lee", "amy@x.io")]);
    drive(&mut state, &service, Message::DeleteUser(UserId(5))).await;
    drive(&mut state, &service, Message::DeleteUserConfirm).await;

    let notice = state.notice.expect("notice after settlement");
    assert_eq!(notice.kind, scholaris_console::notify::NoticeKind::Error);
}
