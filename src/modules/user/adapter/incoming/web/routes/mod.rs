mod add_user_form;
mod create_user;
mod delete_user;
mod edit_user_form;
mod list_users;
mod update_user;

pub use add_user_form::add_user_form_handler;
pub use create_user::create_user_handler;
pub use delete_user::delete_user_handler;
pub use edit_user_form::edit_user_form_handler;
pub use list_users::list_users_handler;
pub use update_user::update_user_handler;
