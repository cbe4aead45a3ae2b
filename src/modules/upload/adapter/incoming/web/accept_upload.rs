use actix_multipart::Multipart;
use actix_web::{http::StatusCode, HttpResponse};
use tracing::warn;

use super::multipart_form::{MultipartForm, MultipartFormError};
use crate::{
    shared::web::PageResponse,
    upload::application::{
        domain::{entities::StoredImage, policies::UploadPolicy},
        ports::incoming::use_cases::{StoreImageError, StoreImageUseCase},
    },
};

/// A parsed form whose file, if any, is already persisted.
#[derive(Debug)]
pub struct AcceptedUpload {
    pub form: MultipartForm,
    pub image: Option<StoredImage>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadRejection {
    #[error(transparent)]
    Form(#[from] MultipartFormError),

    #[error(transparent)]
    Store(#[from] StoreImageError),
}

impl UploadRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadRejection::Form(e) => e.status(),
            UploadRejection::Store(StoreImageError::UnexpectedField(_)) => StatusCode::BAD_REQUEST,
            UploadRejection::Store(StoreImageError::FileTooLarge { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            UploadRejection::Store(StoreImageError::StorageError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Raw failure response; no flash, no redirect.
    pub fn into_response(self) -> HttpResponse {
        warn!(error = %self, "Upload rejected");
        PageResponse::raw_failure(self.status(), &self.to_string())
    }
}

/// Parse the multipart body and persist its image before the handler runs
/// any record logic.
pub async fn accept_upload(
    payload: Multipart,
    policy: &UploadPolicy,
    store_image: &dyn StoreImageUseCase,
) -> Result<AcceptedUpload, UploadRejection> {
    let mut form = MultipartForm::read(payload, policy).await?;

    let image = match form.take_image() {
        Some(incoming) => Some(store_image.execute(incoming).await?),
        None => None,
    };

    Ok(AcceptedUpload { form, image })
}
