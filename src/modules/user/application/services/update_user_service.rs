use async_trait::async_trait;

use super::image_cleanup::discard_image;
use crate::{
    upload::application::ports::outgoing::ImageStore,
    user::application::{
        domain::entities::User,
        ports::{
            incoming::use_cases::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase},
            outgoing::{UserData, UserRepository, UserRepositoryError},
        },
    },
};

#[derive(Debug, Clone)]
pub struct UpdateUserService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    repository: R,
    images: S,
}

impl<R, S> UpdateUserService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    pub fn new(repository: R, images: S) -> Self {
        Self { repository, images }
    }
}

#[async_trait]
impl<R, S> UpdateUserUseCase for UpdateUserService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError> {
        let data = UserData {
            name: command.name.clone(),
            email: command.email.clone(),
            phone: command.phone.clone(),
            image: command.effective_image().to_string(),
        };

        // Record first: the old image stays valid until the row points away from it.
        let result = self.repository.update_user(command.id, data).await;

        match (&result, command.new_image.as_deref()) {
            (Ok(_), Some(new_image)) if new_image != command.old_image => {
                discard_image(&self.images, &command.old_image, "replaced on update").await;
            }
            (Err(_), Some(new_image)) => {
                discard_image(&self.images, new_image, "update not applied").await;
            }
            _ => {}
        }

        result.map_err(|e| match e {
            UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
            UserRepositoryError::DatabaseError(msg) => UpdateUserError::RepositoryError(msg),
        })
    }
}
