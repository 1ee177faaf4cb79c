//! Shared fixtures for command-flow tests: an in-memory directory service
//! and a driver that runs messages and their effects to quiescence.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;

use scholaris_api::types::UserInput;
use scholaris_api::{ApiError, DirectoryService};
use scholaris_console::common::messages::{AppMessage, Effect};
use scholaris_console::domains::user_management::UserManagementState;
use scholaris_console::domains::user_management::messages::Message;
use scholaris_console::domains::user_management::update::update_user_management;
use scholaris_console::runtime::perform;
use scholaris_model::{
    Gender, GenderId, School, SchoolId, StatusId, User, UserId, UserStatus,
};

/// In-memory directory with scriptable failures and call counters.
pub struct StubDirectory {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
    pub list_user_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub update_calls: Mutex<Vec<(UserId, UserInput, UserId)>>,
    pub fail_next_update: Mutex<Option<String>>,
}

impl StubDirectory {
    pub fn with_users(users: Vec<User>) -> Self {
        let next = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        Self {
            users: Mutex::new(users),
            next_id: AtomicI64::new(next),
            list_user_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            update_calls: Mutex::new(Vec::new()),
            fail_next_update: Mutex::new(None),
        }
    }

    pub fn user_ids(&self) -> Vec<i64> {
        self.users.lock().unwrap().iter().map(|u| u.id.0).collect()
    }
}

#[async_trait]
impl DirectoryService for StubDirectory {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.list_user_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().clone())
    }

    async fn list_schools(&self) -> Result<Vec<School>, ApiError> {
        Ok(sample_schools())
    }

    async fn list_genders(&self) -> Result<Vec<Gender>, ApiError> {
        Ok(sample_genders())
    }

    async fn list_statuses(&self) -> Result<Vec<UserStatus>, ApiError> {
        Ok(sample_statuses())
    }

    async fn create_user(
        &self,
        input: UserInput,
        _created_by: UserId,
    ) -> Result<User, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let id = UserId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let user = User {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            school_id: input.school_id,
            status_id: input.status_id,
            gender_id: input.gender_id,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        id: UserId,
        input: UserInput,
        updated_by: UserId,
    ) -> Result<User, ApiError> {
        if let Some(message) = self.fail_next_update.lock().unwrap().take() {
            return Err(ApiError::Server(message));
        }
        self.update_calls
            .lock()
            .unwrap()
            .push((id, input.clone(), updated_by));

        let mut users = self.users.lock().unwrap();
        let record = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| ApiError::Server("user not found".to_string()))?;
        record.first_name = input.first_name;
        record.last_name = input.last_name;
        record.email = input.email;
        record.phone = input.phone;
        record.school_id = input.school_id;
        record.status_id = input.status_id;
        record.gender_id = input.gender_id;
        Ok(record.clone())
    }

    async fn delete_user(
        &self,
        id: UserId,
        _deleted_by: UserId,
    ) -> Result<bool, ApiError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|user| user.id != id);
        Ok(users.len() < before)
    }
}

/// Apply a message, then run every requested effect against the service and
/// feed the settlements back until nothing is left to do.
pub async fn drive(
    state: &mut UserManagementState,
    service: &dyn DirectoryService,
    message: Message,
) {
    let mut queue = VecDeque::from([AppMessage::from(message)]);
    while let Some(next) = queue.pop_front() {
        let AppMessage::UserManagement(message) = next else {
            continue;
        };
        let result = update_user_management(state, message);
        for effect in result.effects {
            let Effect::Directory(command) = effect;
            queue.push_back(perform(service, command).await);
        }
    }
}

pub fn user(id: i64, first: &str, last: &str, email: &str) -> User {
    User {
        id: UserId(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: format!("555-01{id:02}"),
        school_id: SchoolId(1),
        status_id: StatusId(1),
        gender_id: GenderId(1),
    }
}

pub fn sample_schools() -> Vec<School> {
    vec![School {
        id: SchoolId(1),
        name: "Central High School".to_string(),
        emis_number: "EMIS-001".to_string(),
        district: "Central".to_string(),
        province: "Metro".to_string(),
        country: "US".to_string(),
    }]
}

pub fn sample_genders() -> Vec<Gender> {
    vec![
        Gender {
            id: GenderId(1),
            name: "Female".to_string(),
        },
        Gender {
            id: GenderId(2),
            name: "Male".to_string(),
        },
    ]
}

pub fn sample_statuses() -> Vec<UserStatus> {
    vec![
        UserStatus {
            id: StatusId(1),
            name: "Active".to_string(),
            is_active: true,
        },
        UserStatus {
            id: StatusId(2),
            name: "Inactive".to_string(),
            is_active: false,
        },
        UserStatus {
            id: StatusId(3),
            name: "Suspended".to_string(),
            is_active: false,
        },
    ]
}
