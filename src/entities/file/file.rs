use super::{FileId, LastEdited, VersionId};
use crate::entities::UserId;

/// Metadata row of a user creation. The content lives in the blob store under `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    pub id: FileId,
    pub creator: UserId,
    pub last_edited: LastEdited,
    pub version_id: VersionId,
}
