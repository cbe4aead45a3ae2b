use actix_web::{get, web, Responder};
use tracing::error;

use super::super::views::{render_page, IndexPage};
use crate::{
    shared::web::{IncomingFlash, PageResponse},
    AppState,
};

#[get("/")]
pub async fn list_users_handler(flash: IncomingFlash, data: web::Data<AppState>) -> impl Responder {
    match data.list_users_use_case.execute().await {
        Ok(users) => render_page(&IndexPage {
            title: "HomePage",
            flash: flash.into_inner(),
            users: &users,
        }),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            PageResponse::internal_error(&e.to_string())
        }
    }
}
