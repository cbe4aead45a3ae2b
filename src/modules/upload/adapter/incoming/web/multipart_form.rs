use std::collections::HashMap;

use actix_multipart::{Field, Multipart};
use actix_web::http::StatusCode;
use futures::StreamExt;

use crate::upload::application::domain::{entities::IncomingImage, policies::UploadPolicy};

#[derive(Debug, thiserror::Error)]
pub enum MultipartFormError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("Unexpected file field: {0}")]
    UnexpectedField(String),

    #[error("File exceeds the {limit} byte limit")]
    FileTooLarge { limit: usize },

    #[error("Field {0} is too large")]
    FieldTooLarge(String),
}

impl MultipartFormError {
    pub fn status(&self) -> StatusCode {
        match self {
            MultipartFormError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Text fields plus at most one file taken from a `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    image: Option<IncomingImage>,
}

impl MultipartForm {
    /// Drain `payload`, enforcing the size and field rules of `policy`.
    ///
    /// A file part with an empty file name is an empty file input and is
    /// dropped. A file part under any name other than the policy's field, or
    /// a second file part, is rejected.
    pub async fn read(
        mut payload: Multipart,
        policy: &UploadPolicy,
    ) -> Result<Self, MultipartFormError> {
        let mut form = MultipartForm::default();

        while let Some(item) = payload.next().await {
            let mut field = item.map_err(|e| MultipartFormError::Malformed(e.to_string()))?;

            let name = field.name().unwrap_or_default().to_string();
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);

            match file_name {
                Some(original_name) => {
                    if name != policy.field_name || form.image.is_some() {
                        return Err(MultipartFormError::UnexpectedField(name));
                    }

                    let limit = policy.max_file_size_bytes;
                    let bytes = read_limited(&mut field, limit)
                        .await?
                        .ok_or(MultipartFormError::FileTooLarge { limit })?;

                    if original_name.is_empty() {
                        continue;
                    }

                    form.image = Some(IncomingImage {
                        field_name: name,
                        original_name,
                        content_type: field.content_type().map(|m| m.to_string()),
                        bytes,
                    });
                }
                None => {
                    let bytes = read_limited(&mut field, policy.max_text_field_bytes)
                        .await?
                        .ok_or_else(|| MultipartFormError::FieldTooLarge(name.clone()))?;
                    let value = String::from_utf8(bytes).map_err(|_| {
                        MultipartFormError::Malformed(format!("field {name} is not UTF-8"))
                    })?;

                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Value of a text field, empty when the field was not sent.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn take_image(&mut self) -> Option<IncomingImage> {
        self.image.take()
    }
}

/// Collect a field's bytes, or `None` once more than `limit` bytes arrive.
async fn read_limited(
    field: &mut Field,
    limit: usize,
) -> Result<Option<Vec<u8>>, MultipartFormError> {
    let mut buf = Vec::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| MultipartFormError::Malformed(e.to_string()))?;
        if buf.len() + chunk.len() > limit {
            return Ok(None);
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(Some(buf))
}
