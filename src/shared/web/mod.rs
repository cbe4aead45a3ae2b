mod flash;
mod response;
mod session;

pub use flash::{
    take_pending_flash, FlashError, FlashKind, FlashMessage, FlashSession, IncomingFlash,
};
pub use response::{PageResponse, RawFailure};
pub use session::{session_middleware, SESSION_COOKIE_NAME};
