mod file;
mod stats;
mod user_id;

pub use file::{File, FileId, LastEdited, VersionId, VersionIdTryFromError};
pub use stats::Stats;
pub use user_id::UserId;
