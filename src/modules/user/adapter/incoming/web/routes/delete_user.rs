use actix_web::{get, web, Responder};
use tracing::{error, info, warn};

use crate::{
    shared::web::{FlashMessage, FlashSession, PageResponse},
    user::application::{
        domain::entities::UserId, ports::incoming::use_cases::DeleteUserError,
    },
    AppState,
};

// Deletion stays on GET so the list page can link to it directly.
#[get("/delete/{id}")]
pub async fn delete_user_handler(
    path: web::Path<String>,
    flash: FlashSession,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();
    let Ok(id) = raw_id.parse::<UserId>() else {
        warn!(id = %raw_id, "Delete requested for malformed id");
        return flash.redirect(FlashMessage::danger("User not found!"), "/");
    };

    match data.delete_user_use_case.execute(id).await {
        Ok(user) => {
            info!(user_id = %user.id, "User deleted");
            flash.redirect(FlashMessage::info("User has been deleted successfully!"), "/")
        }
        Err(DeleteUserError::UserNotFound) => {
            warn!(user_id = %id, "Delete requested for unknown user");
            flash.redirect(FlashMessage::danger("User not found!"), "/")
        }
        Err(DeleteUserError::RepositoryError(msg)) => {
            error!(user_id = %id, error = %msg, "Failed to delete user");
            PageResponse::internal_error(&msg)
        }
    }
}
