use std::collections::HashSet;

use anyhow::Context;

use crate::ports;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepMode {
    /// Report orphans without deleting them.
    DryRun,
    Delete,
}

/// Finds every blob in `storage` whose key has no row in `user_creations` and,
/// in `SweepMode::Delete`, removes it. Returns the orphan keys.
///
/// Only keys that `storage` lists are considered, so the storage adapter must be
/// scoped to the file blob namespace. Must not run concurrently with `create`:
/// if an id is re-created after the ids were read, its fresh blob is taken for
/// an orphan and deleted.
pub async fn sweep_orphans<R, S>(
    repo: &mut R,
    storage: &mut S,
    mode: SweepMode,
) -> anyhow::Result<Vec<String>>
where
    R: ports::FilesRepository<Error = anyhow::Error>,
    S: ports::Storage<Error = anyhow::Error>,
{
    let keys = storage.list_keys().await.context("list blobs")?;
    let live = repo
        .all_ids()
        .await
        .context("fetch file ids")?
        .into_iter()
        .map(String::from)
        .collect::<HashSet<_>>();

    let orphans = keys
        .into_iter()
        .filter(|key| !live.contains(key))
        .collect::<Vec<_>>();

    if mode == SweepMode::DryRun {
        log::info!("found {} orphan blobs (dry run)", orphans.len());
        return Ok(orphans);
    }

    for key in &orphans {
        storage
            .delete(key)
            .await
            .with_context(|| format!("delete orphan blob {}", key))?;
    }

    log::info!("swept {} orphan blobs", orphans.len());
    Ok(orphans)
}
