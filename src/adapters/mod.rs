mod files_repository_impl;
mod local_storage_impl;
mod memory_storage_impl;
mod storage_impl;

pub use files_repository_impl::*;
pub use local_storage_impl::*;
pub use memory_storage_impl::*;
pub use storage_impl::*;
