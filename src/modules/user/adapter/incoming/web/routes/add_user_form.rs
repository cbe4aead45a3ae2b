use actix_web::{get, Responder};

use super::super::views::{render_page, AddUserPage};
use crate::shared::web::IncomingFlash;

#[get("/add")]
pub async fn add_user_form_handler(flash: IncomingFlash) -> impl Responder {
    render_page(&AddUserPage {
        title: "Add User",
        flash: flash.into_inner(),
    })
}
