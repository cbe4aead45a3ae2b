use serde::Serialize;

/// A file part received from a multipart form, not yet persisted.
#[derive(Debug, Clone)]
pub struct IncomingImage {
    pub field_name: String,
    pub original_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// An image written to the upload directory under its generated name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredImage {
    pub file_name: String,
    pub original_name: String,
    pub content_type: Option<String>,
    pub size_bytes: usize,
}
