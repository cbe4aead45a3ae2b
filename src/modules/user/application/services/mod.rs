mod create_user_service;
mod delete_user_service;
mod fetch_user_service;
mod image_cleanup;
mod list_users_service;
mod update_user_service;

#[cfg(test)]
mod mocks;

pub use create_user_service::CreateUserService;
pub use delete_user_service::DeleteUserService;
pub use fetch_user_service::FetchUserService;
pub use list_users_service::ListUsersService;
pub use update_user_service::UpdateUserService;
