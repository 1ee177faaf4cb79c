use scholaris_model::{
    Gender, GenderId, School, StatusId, User, UserId, UserStatus,
};

#[derive(Clone, Debug)]
pub enum Message {
    // Directory queries
    LoadDirectory,
    UsersLoaded(Result<Vec<User>, String>),
    SchoolsLoaded(Result<Vec<School>, String>),
    GendersLoaded(Result<Vec<Gender>, String>),
    StatusesLoaded(Result<Vec<UserStatus>, String>),

    // Table search
    SearchChanged(String),

    // Shared create/edit form fields
    FormSchoolChanged(String),
    FormStatusChanged(StatusId),
    FormFirstNameChanged(String),
    FormLastNameChanged(String),
    FormEmailChanged(String),
    FormPhoneChanged(String),
    FormGenderChanged(GenderId),

    // User creation
    CreateUser,
    CreateUserFormSubmit,
    CreateUserSuccess(User),
    CreateUserError(String),
    CreateUserCancel,

    // User updates
    UpdateUser(UserId),
    UpdateUserFormSubmit,
    UpdateUserSuccess(User),
    UpdateUserError(String),
    UpdateUserCancel,

    // User deletion
    DeleteUser(UserId),
    DeleteUserConfirm,
    DeleteUserCancel,
    DeleteUserSuccess(UserId),
    DeleteUserError(String),

    // Inline status menu
    ToggleStatusMenu(UserId),
    SelectStatus { user: UserId, status: StatusId },
    StatusChangeSuccess(User),
    StatusChangeError(String),

    // Notices
    DismissNotice,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadDirectory => "UserManagement::LoadDirectory",
            Self::UsersLoaded(_) => "UserManagement::UsersLoaded",
            Self::SchoolsLoaded(_) => "UserManagement::SchoolsLoaded",
            Self::GendersLoaded(_) => "UserManagement::GendersLoaded",
            Self::StatusesLoaded(_) => "UserManagement::StatusesLoaded",

            Self::SearchChanged(_) => "UserManagement::SearchChanged",

            Self::FormSchoolChanged(_) => "UserManagement::FormSchoolChanged",
            Self::FormStatusChanged(_) => "UserManagement::FormStatusChanged",
            Self::FormFirstNameChanged(_) => {
                "UserManagement::FormFirstNameChanged"
            }
            Self::FormLastNameChanged(_) => {
                "UserManagement::FormLastNameChanged"
            }
            Self::FormEmailChanged(_) => "UserManagement::FormEmailChanged",
            Self::FormPhoneChanged(_) => "UserManagement::FormPhoneChanged",
            Self::FormGenderChanged(_) => "UserManagement::FormGenderChanged",

            Self::CreateUser => "UserManagement::CreateUser",
            Self::CreateUserFormSubmit => "UserManagement::CreateUserFormSubmit",
            Self::CreateUserSuccess(_) => "UserManagement::CreateUserSuccess",
            Self::CreateUserError(_) => "UserManagement::CreateUserError",
            Self::CreateUserCancel => "UserManagement::CreateUserCancel",

            Self::UpdateUser(_) => "UserManagement::UpdateUser",
            Self::UpdateUserFormSubmit => "UserManagement::UpdateUserFormSubmit",
            Self::UpdateUserSuccess(_) => "UserManagement::UpdateUserSuccess",
            Self::UpdateUserError(_) => "UserManagement::UpdateUserError",
            Self::UpdateUserCancel => "UserManagement::UpdateUserCancel",

            Self::DeleteUser(_) => "UserManagement::DeleteUser",
            Self::DeleteUserConfirm => "UserManagement::DeleteUserConfirm",
            Self::DeleteUserCancel => "UserManagement::DeleteUserCancel",
            Self::DeleteUserSuccess(_) => "UserManagement::DeleteUserSuccess",
            Self::DeleteUserError(_) => "UserManagement::DeleteUserError",

            Self::ToggleStatusMenu(_) => "UserManagement::ToggleStatusMenu",
            Self::SelectStatus { .. } => "UserManagement::SelectStatus",
            Self::StatusChangeSuccess(_) => {
                "UserManagement::StatusChangeSuccess"
            }
            Self::StatusChangeError(_) => "UserManagement::StatusChangeError",

            Self::DismissNotice => "UserManagement::DismissNotice",
        }
    }

    /// Whether this message is an operator intent, as opposed to a query or
    /// mutation settlement. Intents are dropped while a mutation is in
    /// flight; settlements always apply.
    pub fn is_intent(&self) -> bool {
        !matches!(
            self,
            Self::LoadDirectory
                | Self::UsersLoaded(_)
                | Self::SchoolsLoaded(_)
                | Self::GendersLoaded(_)
                | Self::StatusesLoaded(_)
                | Self::CreateUserSuccess(_)
                | Self::CreateUserError(_)
                | Self::UpdateUserSuccess(_)
                | Self::UpdateUserError(_)
                | Self::DeleteUserSuccess(_)
                | Self::DeleteUserError(_)
                | Self::StatusChangeSuccess(_)
                | Self::StatusChangeError(_)
        )
    }
}
