pub mod entities;
pub mod file_name;
pub mod policies;
