use async_trait::async_trait;
use tracing::{error, info};

use crate::upload::application::{
    domain::{
        entities::{IncomingImage, StoredImage},
        policies::UploadPolicy,
    },
    ports::{
        incoming::use_cases::{StoreImageError, StoreImageUseCase},
        outgoing::ImageStore,
    },
};

#[derive(Debug, Clone)]
pub struct StoreImageService<S>
where
    S: ImageStore + Send + Sync,
{
    store: S,
    policy: UploadPolicy,
}

impl<S> StoreImageService<S>
where
    S: ImageStore + Send + Sync,
{
    pub fn new(store: S, policy: UploadPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl<S> StoreImageUseCase for StoreImageService<S>
where
    S: ImageStore + Send + Sync,
{
    async fn execute(&self, image: IncomingImage) -> Result<StoredImage, StoreImageError> {
        if image.field_name != self.policy.field_name {
            return Err(StoreImageError::UnexpectedField(image.field_name));
        }

        if image.bytes.len() > self.policy.max_file_size_bytes {
            return Err(StoreImageError::FileTooLarge {
                limit: self.policy.max_file_size_bytes,
            });
        }

        match self.store.save(image).await {
            Ok(stored) => {
                info!(
                    file_name = %stored.file_name,
                    size_bytes = stored.size_bytes,
                    "Image stored"
                );
                Ok(stored)
            }
            Err(e) => {
                error!(error = %e, "Failed to store image");
                Err(StoreImageError::StorageError(e.to_string()))
            }
        }
    }
}
