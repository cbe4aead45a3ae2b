use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    /// Remove the record and then its image file. Returns the removed record.
    async fn execute(&self, id: UserId) -> Result<User, DeleteUserError>;
}
