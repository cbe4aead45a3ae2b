use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::user::application::{
    domain::entities::{User, UserId},
    ports::outgoing::{UserQuery, UserQueryError},
};

// SeaORM entity
use super::sea_orm_entity::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        let models: Vec<UserModel> = UserEntity::find()
            .order_by_asc(UserColumn::CreatedAt)
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(UserModel::to_user).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(UserModel::to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .order_by_asc(UserColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(UserModel::to_user))
    }
}
