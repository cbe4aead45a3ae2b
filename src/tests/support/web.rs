use actix_web::{
    cookie::{Cookie, Key},
    dev::ServiceResponse,
    get,
    test::TestRequest,
    HttpResponse,
};

use crate::shared::web::{session_middleware, IncomingFlash, SESSION_COOKIE_NAME};

pub const FLASH_PROBE_PATH: &str = "/__flash";

pub fn test_session_middleware(
) -> actix_session::SessionMiddleware<actix_session::storage::CookieSessionStore> {
    session_middleware(Key::generate(), false)
}

/// Echoes the flash message the current request carried, as JSON.
#[get("/__flash")]
pub async fn flash_probe(flash: IncomingFlash) -> HttpResponse {
    HttpResponse::Ok().json(flash.into_inner())
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE_NAME)
        .map(|c| c.into_owned())
}

/// Request for [`flash_probe`] carrying the session cookie set by `resp`.
pub fn flash_probe_request<B>(resp: &ServiceResponse<B>) -> TestRequest {
    let req = TestRequest::get().uri(FLASH_PROBE_PATH);
    match session_cookie(resp) {
        Some(cookie) => req.cookie(cookie),
        None => req,
    }
}

pub fn location<B>(resp: &ServiceResponse<B>) -> &str {
    resp.headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
