mod store_image_use_case;

pub use store_image_use_case::{StoreImageError, StoreImageUseCase};
