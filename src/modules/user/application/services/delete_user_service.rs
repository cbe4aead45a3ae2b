use async_trait::async_trait;

use super::image_cleanup::discard_image;
use crate::{
    upload::application::ports::outgoing::ImageStore,
    user::application::{
        domain::entities::{User, UserId},
        ports::{
            incoming::use_cases::{DeleteUserError, DeleteUserUseCase},
            outgoing::{UserRepository, UserRepositoryError},
        },
    },
};

#[derive(Debug, Clone)]
pub struct DeleteUserService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    repository: R,
    images: S,
}

impl<R, S> DeleteUserService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    pub fn new(repository: R, images: S) -> Self {
        Self { repository, images }
    }
}

#[async_trait]
impl<R, S> DeleteUserUseCase for DeleteUserService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(&self, id: UserId) -> Result<User, DeleteUserError> {
        let removed = self.repository.delete_user(id).await.map_err(|e| match e {
            UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
            UserRepositoryError::DatabaseError(msg) => DeleteUserError::RepositoryError(msg),
        })?;

        discard_image(&self.images, &removed.image, "user deleted").await;

        Ok(removed)
    }
}
