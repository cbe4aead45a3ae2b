use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use crate::upload::application::{
    domain::{
        entities::{IncomingImage, StoredImage},
        file_name::{generated_file_name, is_plain_file_name, sanitize_original_name},
        policies::UploadPolicy,
    },
    ports::outgoing::{ImageStore, ImageStoreError},
};

/// How many successive timestamps are tried before giving up on a name.
const MAX_NAME_ATTEMPTS: i64 = 32;

const NAME_PREFIX_RESERVE: usize = 64;

/// Images kept as plain files in a single directory, which is also served
/// statically at the site root.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
    max_original_len: usize,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_policy(root, &UploadPolicy::default())
    }

    /// Store whose generated names stay within `policy.max_file_name_len`.
    pub fn with_policy(root: impl Into<PathBuf>, policy: &UploadPolicy) -> Self {
        Self {
            root: root.into(),
            // Leaves room for "<field>_<millis>_" inside the file name limit.
            max_original_len: policy
                .max_file_name_len
                .saturating_sub(NAME_PREFIX_RESERVE)
                .max(1),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, file_name: &str) -> Result<PathBuf, ImageStoreError> {
        if !is_plain_file_name(file_name) {
            return Err(ImageStoreError::InvalidName(file_name.to_string()));
        }
        Ok(self.root.join(file_name))
    }

    async fn write_new(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;

        if let Err(e) = async {
            file.write_all(bytes).await?;
            file.flush().await
        }
        .await
        {
            drop(file);
            // Partial files must not stay addressable.
            let _ = fs::remove_file(path).await;
            return Err(e);
        }

        Ok(())
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, image: IncomingImage) -> Result<StoredImage, ImageStoreError> {
        let original = sanitize_original_name(&image.original_name, self.max_original_len);
        let mut timestamp = Utc::now().timestamp_millis();

        for _ in 0..MAX_NAME_ATTEMPTS {
            let file_name = generated_file_name(&image.field_name, timestamp, &original);
            let path = self.resolve(&file_name)?;

            match Self::write_new(&path, &image.bytes).await {
                Ok(()) => {
                    return Ok(StoredImage {
                        file_name,
                        original_name: image.original_name,
                        content_type: image.content_type,
                        size_bytes: image.bytes.len(),
                    });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!(file_name = %file_name, "Image name taken, retrying");
                    timestamp += 1;
                }
                Err(e) => return Err(ImageStoreError::Io(e.to_string())),
            }
        }

        Err(ImageStoreError::NameExhausted(original))
    }

    async fn remove(&self, file_name: &str) -> Result<(), ImageStoreError> {
        let path = self.resolve(file_name)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ImageStoreError::NotFound(file_name.to_string()))
            }
            Err(e) => Err(ImageStoreError::Io(e.to_string())),
        }
    }
}
