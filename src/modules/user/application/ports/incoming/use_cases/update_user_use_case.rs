use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserId};

/// Full replacement of a user's fields.
///
/// `new_image` is set when the request carried a file, which is already
/// stored. Otherwise the record keeps `old_image`, the value the edit form
/// echoed back.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUserCommand {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub new_image: Option<String>,
    pub old_image: String,
}

impl UpdateUserCommand {
    /// The image the record points to once the update lands.
    pub fn effective_image(&self) -> &str {
        self.new_image.as_deref().unwrap_or(&self.old_image)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError>;
}
