mod accept_upload;
mod multipart_form;

pub use accept_upload::{accept_upload, AcceptedUpload, UploadRejection};
pub use multipart_form::{MultipartForm, MultipartFormError};
