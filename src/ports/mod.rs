mod files_repository;
mod storage;

pub use files_repository::*;
pub use storage::*;
