mod file;
mod file_id;
mod last_edited;
mod version_id;

pub use file::File;
pub use file_id::FileId;
pub use last_edited::LastEdited;
pub use version_id::{VersionId, VersionIdTryFromError};
