use anyhow::Context;

use crate::{entities, ports};

/// Inserts the metadata row, then writes the blob under `file.id`.
///
/// The two writes are independent: if the blob write fails the row stays in
/// place and `content` reports nothing for it. A duplicate id fails on the row
/// insert before any blob is written.
pub async fn create<R, S>(
    file: &entities::File,
    data: String,
    repo: &mut R,
    storage: &mut S,
) -> anyhow::Result<()>
where
    R: ports::FilesRepository<Error = anyhow::Error>,
    S: ports::Storage<Error = anyhow::Error>,
{
    repo.insert(file).await.context("insert file row")?;
    storage
        .put(file.id.as_str(), data)
        .await
        .context("write file content")?;

    log::debug!("created file {} for {}", file.id, file.creator);
    Ok(())
}

/// Overwrites `lastEdited`/`versionId` on the row owned by `file.creator`, then
/// overwrites the blob. The values are stored as given and the last writer wins.
pub async fn update<R, S>(
    file: &entities::File,
    data: String,
    repo: &mut R,
    storage: &mut S,
) -> anyhow::Result<()>
where
    R: ports::FilesRepository<Error = anyhow::Error>,
    S: ports::Storage<Error = anyhow::Error>,
{
    let rows = repo.update(file).await.context("update file row")?;
    if rows == 0 {
        log::warn!("update matched no row for file {} of {}", file.id, file.creator);
    }
    storage
        .put(file.id.as_str(), data)
        .await
        .context("write file content")?;

    Ok(())
}

/// Deletes the row for `id` owned by `user_id` and returns the number of rows
/// removed. The blob is left in place; see `maintenance_command::sweep_orphans`.
pub async fn delete_file<R>(
    repo: &mut R,
    user_id: &entities::UserId,
    id: &entities::FileId,
) -> anyhow::Result<u64>
where
    R: ports::FilesRepository<Error = anyhow::Error>,
{
    repo.delete(user_id, id).await.context("delete file row")
}
