use async_trait::async_trait;

use crate::user::application::{
    domain::entities::User,
    ports::{
        incoming::use_cases::{ListUsersError, ListUsersUseCase},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        self.query
            .list_users()
            .await
            .map_err(|e| ListUsersError::QueryFailed(e.to_string()))
    }
}
