mod user_query;
mod user_repository;

pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserData, UserRepository, UserRepositoryError};
