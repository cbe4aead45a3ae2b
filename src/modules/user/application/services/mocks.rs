use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::{
    upload::application::{
        domain::entities::{IncomingImage, StoredImage},
        ports::outgoing::{ImageStore, ImageStoreError},
    },
    user::application::{
        domain::entities::{User, UserId},
        ports::outgoing::{UserData, UserQuery, UserQueryError, UserRepository, UserRepositoryError},
    },
};

mock! {
    pub UserQueryMock {}
    #[async_trait]
    impl UserQuery for UserQueryMock {
        async fn list_users(&self) -> Result<Vec<User>, UserQueryError>;
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    }
}

mock! {
    pub UserRepositoryMock {}
    #[async_trait]
    impl UserRepository for UserRepositoryMock {
        async fn create_user(&self, data: UserData) -> Result<User, UserRepositoryError>;
        async fn update_user(&self, id: UserId, data: UserData) -> Result<User, UserRepositoryError>;
        async fn delete_user(&self, id: UserId) -> Result<User, UserRepositoryError>;
    }
}

mock! {
    pub ImageStoreMock {}
    #[async_trait]
    impl ImageStore for ImageStoreMock {
        async fn save(&self, image: IncomingImage) -> Result<StoredImage, ImageStoreError>;
        async fn remove(&self, file_name: &str) -> Result<(), ImageStoreError>;
    }
}

pub fn sample_user(id: UserId, email: &str, image: &str) -> User {
    let now = Utc::now();
    User {
        id,
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        image: image.to_string(),
        created_at: now,
        updated_at: now,
    }
}
