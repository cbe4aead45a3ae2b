use actix_web::HttpResponse;
use askama::Template;
use tracing::error;

use crate::{
    shared::web::{FlashMessage, PageResponse},
    user::application::domain::entities::User,
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub title: &'a str,
    pub flash: Option<FlashMessage>,
    pub users: &'a [User],
}

#[derive(Template)]
#[template(path = "add_users.html")]
pub struct AddUserPage<'a> {
    pub title: &'a str,
    pub flash: Option<FlashMessage>,
}

#[derive(Template)]
#[template(path = "edit_users.html")]
pub struct EditUserPage<'a> {
    pub title: &'a str,
    pub flash: Option<FlashMessage>,
    pub user: &'a User,
}

/// Render a page, or answer on the raw channel if the template fails.
pub fn render_page<T: Template>(page: &T) -> HttpResponse {
    match page.render() {
        Ok(body) => PageResponse::html(body),
        Err(e) => {
            error!(error = %e, "Template rendering failed");
            PageResponse::internal_error(&e.to_string())
        }
    }
}
