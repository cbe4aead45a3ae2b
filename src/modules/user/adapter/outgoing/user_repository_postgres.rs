use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::user::application::{
    domain::entities::{User, UserId},
    ports::outgoing::{UserData, UserRepository, UserRepositoryError},
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_existing(&self, id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: UserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            image: Set(data.image),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted: UserModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_user())
    }

    async fn update_user(&self, id: UserId, data: UserData) -> Result<User, UserRepositoryError> {
        let existing = self.find_existing(id).await?;

        let mut active: UserActiveModel = existing.into();
        active.name = Set(data.name);
        active.email = Set(data.email);
        active.phone = Set(data.phone);
        active.image = Set(data.image);
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            // Row vanished between the lookup and the write.
            DbErr::RecordNotUpdated => UserRepositoryError::UserNotFound,
            other => UserRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(updated.to_user())
    }

    async fn delete_user(&self, id: UserId) -> Result<User, UserRepositoryError> {
        let existing = self.find_existing(id).await?;

        let result = UserEntity::delete_by_id(id.value())
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(existing.to_user())
    }
}
