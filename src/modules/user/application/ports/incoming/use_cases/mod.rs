mod create_user_use_case;
mod delete_user_use_case;
mod fetch_user_use_case;
mod list_users_use_case;
mod update_user_use_case;

pub use create_user_use_case::{CreateUserCommand, CreateUserError, CreateUserUseCase};
pub use delete_user_use_case::{DeleteUserError, DeleteUserUseCase};
pub use fetch_user_use_case::{FetchUserError, FetchUserUseCase};
pub use list_users_use_case::{ListUsersError, ListUsersUseCase};
pub use update_user_use_case::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase};
