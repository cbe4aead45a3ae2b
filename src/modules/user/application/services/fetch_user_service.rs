use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{User, UserId},
    ports::{
        incoming::use_cases::{FetchUserError, FetchUserUseCase},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserUseCase for FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, id: UserId) -> Result<User, FetchUserError> {
        match self.query.find_by_id(id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(FetchUserError::UserNotFound),
            Err(e) => Err(FetchUserError::QueryFailed(e.to_string())),
        }
    }
}
