#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// The only multipart field allowed to carry a file.
    pub field_name: &'static str,
    pub max_file_size_bytes: usize,
    pub max_text_field_bytes: usize,
    pub max_file_name_len: usize,
    /// Keep the stored image when a create is rejected for a duplicate email.
    pub keep_rejected_uploads: bool,
}

impl UploadPolicy {
    pub const DEFAULT_FIELD_NAME: &'static str = "image";
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;
    pub const DEFAULT_MAX_FILE_NAME_LEN: usize = 255;

    pub fn new(max_file_size_bytes: usize, keep_rejected_uploads: bool) -> Self {
        Self {
            max_file_size_bytes,
            keep_rejected_uploads,
            ..Self::default()
        }
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            field_name: Self::DEFAULT_FIELD_NAME,
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_text_field_bytes: Self::DEFAULT_MAX_TEXT_FIELD_BYTES,
            max_file_name_len: Self::DEFAULT_MAX_FILE_NAME_LEN,
            keep_rejected_uploads: true,
        }
    }
}
