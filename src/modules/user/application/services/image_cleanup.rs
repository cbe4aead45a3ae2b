use tracing::{debug, warn};

use crate::upload::application::ports::outgoing::ImageStore;

/// Best-effort removal of an image file. Failures are logged and never
/// change the outcome of the surrounding operation.
pub(crate) async fn discard_image<S>(images: &S, file_name: &str, reason: &'static str)
where
    S: ImageStore + ?Sized,
{
    if file_name.is_empty() {
        return;
    }

    match images.remove(file_name).await {
        Ok(()) => debug!(file_name, reason, "Image removed"),
        Err(e) => warn!(file_name, reason, error = %e, "Could not remove image"),
    }
}
