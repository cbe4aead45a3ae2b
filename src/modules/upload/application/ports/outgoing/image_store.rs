use async_trait::async_trait;

use crate::upload::application::domain::entities::{IncomingImage, StoredImage};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageStoreError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Invalid image name: {0}")]
    InvalidName(String),

    #[error("No free file name left for {0}")]
    NameExhausted(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Flat directory of uploaded images addressed by file name.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist the bytes under a freshly generated, unused name.
    async fn save(&self, image: IncomingImage) -> Result<StoredImage, ImageStoreError>;

    async fn remove(&self, file_name: &str) -> Result<(), ImageStoreError>;
}
