use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Failed to fetch user: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait FetchUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<User, FetchUserError>;
}
