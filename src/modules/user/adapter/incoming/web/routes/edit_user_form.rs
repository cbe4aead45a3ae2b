use actix_web::{get, web, Responder};
use tracing::{error, info};

use super::super::views::{render_page, EditUserPage};
use crate::{
    shared::web::{IncomingFlash, PageResponse},
    user::application::{
        domain::entities::UserId, ports::incoming::use_cases::FetchUserError,
    },
    AppState,
};

/// Unknown or malformed ids, and lookup failures, send the browser back to
/// the list without a message.
#[get("/edit/{id}")]
pub async fn edit_user_form_handler(
    path: web::Path<String>,
    flash: IncomingFlash,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();
    let Ok(id) = raw_id.parse::<UserId>() else {
        info!(id = %raw_id, "Edit requested for malformed id");
        return PageResponse::redirect("/");
    };

    match data.fetch_user_use_case.execute(id).await {
        Ok(user) => render_page(&EditUserPage {
            title: "Edit User",
            flash: flash.into_inner(),
            user: &user,
        }),
        Err(FetchUserError::UserNotFound) => {
            info!(user_id = %id, "Edit requested for unknown user");
            PageResponse::redirect("/")
        }
        Err(e) => {
            error!(user_id = %id, error = %e, "Failed to load user for editing");
            PageResponse::redirect("/")
        }
    }
}
