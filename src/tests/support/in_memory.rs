use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::user::application::{
    domain::entities::{User, UserId},
    ports::outgoing::{UserData, UserQuery, UserQueryError, UserRepository, UserRepositoryError},
};

/// Vec-backed user table shared by the query and repository ports.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        Ok(self.users.lock().await.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.users.lock().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, data: UserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            image: data.image,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().await.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: UserId, data: UserData) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        user.name = data.name;
        user.email = data.email;
        user.phone = data.phone;
        user.image = data.image;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete_user(&self, id: UserId) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().await;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        Ok(users.remove(index))
    }
}
