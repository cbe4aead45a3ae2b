use async_trait::async_trait;
use tracing::warn;

use super::image_cleanup::discard_image;
use crate::{
    upload::application::ports::outgoing::ImageStore,
    user::application::{
        domain::entities::User,
        ports::{
            incoming::use_cases::{CreateUserCommand, CreateUserError, CreateUserUseCase},
            outgoing::{UserData, UserQuery, UserRepository},
        },
    },
};

#[derive(Debug, Clone)]
pub struct CreateUserService<Q, R, S>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    query: Q,
    repository: R,
    images: S,
    keep_rejected_uploads: bool,
}

impl<Q, R, S> CreateUserService<Q, R, S>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    pub fn new(query: Q, repository: R, images: S, keep_rejected_uploads: bool) -> Self {
        Self {
            query,
            repository,
            images,
            keep_rejected_uploads,
        }
    }
}

#[async_trait]
impl<Q, R, S> CreateUserUseCase for CreateUserService<Q, R, S>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        // The image is already on disk at this point.
        match self.query.find_by_email(command.email()).await {
            Ok(Some(existing)) => {
                warn!(
                    email = %command.email(),
                    existing_id = %existing.id,
                    "Rejected user with duplicate email"
                );
                if !self.keep_rejected_uploads {
                    discard_image(&self.images, command.image(), "duplicate email").await;
                }
                return Err(CreateUserError::EmailAlreadyExists);
            }
            Ok(None) => {}
            Err(e) => {
                discard_image(&self.images, command.image(), "email lookup failed").await;
                return Err(CreateUserError::RepositoryError(e.to_string()));
            }
        }

        let data = UserData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            phone: command.phone().to_string(),
            image: command.image().to_string(),
        };

        match self.repository.create_user(data).await {
            Ok(user) => Ok(user),
            Err(e) => {
                discard_image(&self.images, command.image(), "insert failed").await;
                Err(CreateUserError::RepositoryError(e.to_string()))
            }
        }
    }
}
