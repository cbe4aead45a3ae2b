use async_trait::async_trait;

use crate::upload::application::domain::entities::{IncomingImage, StoredImage};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreImageError {
    #[error("Unexpected file field: {0}")]
    UnexpectedField(String),

    #[error("File exceeds the {limit} byte limit")]
    FileTooLarge { limit: usize },

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait StoreImageUseCase: Send + Sync {
    async fn execute(&self, image: IncomingImage) -> Result<StoredImage, StoreImageError>;
}
