use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::upload::application::{
    domain::entities::{IncomingImage, StoredImage},
    ports::incoming::use_cases::{StoreImageError, StoreImageUseCase},
};
use crate::user::application::{
    domain::entities::{User, UserId},
    ports::incoming::use_cases::{
        CreateUserCommand, CreateUserError, CreateUserUseCase, DeleteUserError,
        DeleteUserUseCase, FetchUserError, FetchUserUseCase, ListUsersError, ListUsersUseCase,
        UpdateUserCommand, UpdateUserError, UpdateUserUseCase,
    },
};

pub const STUB_TIMESTAMP: i64 = 1_700_000_000_000;

pub fn sample_user(name: &str, email: &str, image: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId::new(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        image: image.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Shared log of the inputs a stub was called with.
pub type Calls<T> = Arc<Mutex<Vec<T>>>;

fn record<T>(calls: &Calls<T>, value: T) {
    calls.lock().unwrap().push(value);
}

// ============================================================
// List
// ============================================================

#[derive(Clone)]
pub struct StubListUsersUseCase {
    result: Result<Vec<User>, ListUsersError>,
}

impl StubListUsersUseCase {
    pub fn success(users: Vec<User>) -> Self {
        Self { result: Ok(users) }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(ListUsersError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        self.result.clone()
    }
}

// ============================================================
// Create
// ============================================================

#[derive(Clone, Default)]
pub struct StubCreateUserUseCase {
    result: Option<Result<User, CreateUserError>>,
    pub calls: Calls<CreateUserCommand>,
}

impl StubCreateUserUseCase {
    pub fn returning(result: Result<User, CreateUserError>) -> Self {
        Self {
            result: Some(result),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        record(&self.calls, command);
        self.result
            .clone()
            .unwrap_or_else(|| unimplemented!("Not used in this test"))
    }
}

// ============================================================
// Fetch
// ============================================================

#[derive(Clone, Default)]
pub struct StubFetchUserUseCase {
    result: Option<Result<User, FetchUserError>>,
    pub calls: Calls<UserId>,
}

impl StubFetchUserUseCase {
    pub fn returning(result: Result<User, FetchUserError>) -> Self {
        Self {
            result: Some(result),
            ..Self::default()
        }
    }
}

#[async_trait]
impl FetchUserUseCase for StubFetchUserUseCase {
    async fn execute(&self, id: UserId) -> Result<User, FetchUserError> {
        record(&self.calls, id);
        self.result
            .clone()
            .unwrap_or_else(|| unimplemented!("Not used in this test"))
    }
}

// ============================================================
// Update
// ============================================================

#[derive(Clone, Default)]
pub struct StubUpdateUserUseCase {
    result: Option<Result<User, UpdateUserError>>,
    pub calls: Calls<UpdateUserCommand>,
}

impl StubUpdateUserUseCase {
    pub fn returning(result: Result<User, UpdateUserError>) -> Self {
        Self {
            result: Some(result),
            ..Self::default()
        }
    }
}

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError> {
        record(&self.calls, command);
        self.result
            .clone()
            .unwrap_or_else(|| unimplemented!("Not used in this test"))
    }
}

// ============================================================
// Delete
// ============================================================

#[derive(Clone, Default)]
pub struct StubDeleteUserUseCase {
    result: Option<Result<User, DeleteUserError>>,
    pub calls: Calls<UserId>,
}

impl StubDeleteUserUseCase {
    pub fn returning(result: Result<User, DeleteUserError>) -> Self {
        Self {
            result: Some(result),
            ..Self::default()
        }
    }
}

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, id: UserId) -> Result<User, DeleteUserError> {
        record(&self.calls, id);
        self.result
            .clone()
            .unwrap_or_else(|| unimplemented!("Not used in this test"))
    }
}

// ============================================================
// Store image
// ============================================================

/// Accepts every image and names it deterministically.
#[derive(Clone, Default)]
pub struct StubStoreImageUseCase {
    failure: Option<StoreImageError>,
    pub calls: Calls<IncomingImage>,
}

impl StubStoreImageUseCase {
    pub fn failing(error: StoreImageError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn stored_name(original: &str) -> String {
        format!("image_{STUB_TIMESTAMP}_{original}")
    }
}

#[async_trait]
impl StoreImageUseCase for StubStoreImageUseCase {
    async fn execute(&self, image: IncomingImage) -> Result<StoredImage, StoreImageError> {
        record(&self.calls, image.clone());
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        Ok(StoredImage {
            file_name: Self::stored_name(&image.original_name),
            original_name: image.original_name,
            content_type: image.content_type,
            size_bytes: image.bytes.len(),
        })
    }
}
