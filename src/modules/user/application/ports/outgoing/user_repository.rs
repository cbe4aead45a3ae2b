use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserId};

// Input DTO for creating or replacing a user's fields
#[derive(Debug, Clone, PartialEq)]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub image: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: UserData) -> Result<User, UserRepositoryError>;

    /// Replace all four fields of an existing user.
    async fn update_user(&self, id: UserId, data: UserData) -> Result<User, UserRepositoryError>;

    /// Remove a user, returning the record as it was.
    async fn delete_user(&self, id: UserId) -> Result<User, UserRepositoryError>;
}
