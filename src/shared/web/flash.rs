//! One-shot flash messages carried across a redirect.
//!
//! A mutating handler stores at most one message in the session through
//! [`FlashSession`]. On the next request [`take_pending_flash`] removes it from
//! the session and parks it in the request extensions, where page handlers
//! read it with the [`IncomingFlash`] extractor. The message is therefore
//! shown exactly once.

use std::fmt;

use actix_session::{Session, SessionExt};
use actix_web::{
    body::MessageBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    middleware::Next,
    FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::PageResponse;

pub(crate) const FLASH_KEY: &str = "flash";

#[derive(Debug, thiserror::Error)]
pub enum FlashError {
    #[error("failed to persist flash message: {0}")]
    Persist(String),

    #[error("unreadable flash message in session: {0}")]
    Unreadable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Danger,
    Info,
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlashKind::Success => "success",
            FlashKind::Danger => "danger",
            FlashKind::Info => "info",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    #[serde(rename = "type")]
    pub kind: FlashKind,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Danger,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            message: message.into(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Writing side
// ──────────────────────────────────────────────────────────
//

/// Session wrapper used by mutating handlers to leave a message for the
/// next page render.
#[derive(Clone)]
pub struct FlashSession(Session);

impl FlashSession {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `flash` as the pending message, replacing any earlier one.
    pub fn set(&self, flash: FlashMessage) -> Result<(), FlashError> {
        self.0
            .insert(FLASH_KEY, flash)
            .map_err(|e| FlashError::Persist(e.to_string()))
    }

    /// Remove and return the pending message.
    pub fn take(&self) -> Result<Option<FlashMessage>, FlashError> {
        match self.0.remove_as::<FlashMessage>(FLASH_KEY) {
            None => Ok(None),
            Some(Ok(flash)) => Ok(Some(flash)),
            Some(Err(raw)) => Err(FlashError::Unreadable(raw)),
        }
    }

    /// Set the pending message and answer with a redirect to `location`.
    /// A session write failure loses the message but not the redirect.
    pub fn redirect(&self, flash: FlashMessage, location: &str) -> HttpResponse {
        if let Err(e) = self.set(flash) {
            error!(error = %e, "Flash message dropped");
        }
        PageResponse::redirect(location)
    }
}

impl FromRequest for FlashSession {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(FlashSession::new) })
    }
}

//
// ──────────────────────────────────────────────────────────
// Reading side
// ──────────────────────────────────────────────────────────
//

/// The message taken from the session for this request, if any.
#[derive(Debug, Clone, Default)]
pub struct IncomingFlash(pub Option<FlashMessage>);

impl IncomingFlash {
    pub fn into_inner(self) -> Option<FlashMessage> {
        self.0
    }
}

impl FromRequest for IncomingFlash {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(req
            .extensions()
            .get::<IncomingFlash>()
            .cloned()
            .unwrap_or_default()))
    }
}

/// Middleware: move the pending flash out of the session into the request
/// extensions. Must run inside the session middleware.
pub async fn take_pending_flash(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = FlashSession::new(req.get_session());

    let pending = session.take().unwrap_or_else(|e| {
        warn!(error = %e, "Discarding pending flash message");
        None
    });

    req.extensions_mut().insert(IncomingFlash(pending));

    next.call(req).await
}
