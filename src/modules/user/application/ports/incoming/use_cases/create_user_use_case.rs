use async_trait::async_trait;

use crate::user::application::domain::entities::User;

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

/// `image` names a file already written to the upload directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserCommand {
    name: String,
    email: String,
    phone: String,
    image: String,
}

impl CreateUserCommand {
    pub fn new(name: String, email: String, phone: String, image: String) -> Self {
        Self {
            name,
            email,
            phone,
            image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("User already exists with this email")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError>;
}
