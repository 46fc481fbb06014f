use std::future::Future;

use anyhow::Context;

use crate::async_util::sequential;
use crate::{entities, ports};

/// Loads every file owned by `user_id` and maps each through `f`.
///
/// The mapped futures are awaited one at a time in row order, so any side
/// effects of `f` happen in that order. No pagination.
pub async fn get_creations<R, F, Fut, T>(
    repo: &mut R,
    user_id: &entities::UserId,
    f: F,
) -> anyhow::Result<Vec<T>>
where
    R: ports::FilesRepository<Error = anyhow::Error>,
    F: FnMut(entities::File) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let files = repo
        .get_by_creator(user_id)
        .await
        .context("fetch creations")?;

    sequential(files.into_iter().map(f)).await
}

/// Text stored under `name`, or `None` if there is no such blob.
pub async fn content<S>(name: &str, storage: &mut S) -> anyhow::Result<Option<String>>
where
    S: ports::Storage<Error = anyhow::Error>,
{
    storage
        .get(name)
        .await
        .with_context(|| format!("read content {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FilesRepositoryImpl, MemoryStorageImpl};
    use crate::ports::{FilesRepository, Storage};
    use crate::test_util::memory_pool;
    use anyhow::anyhow;
    use std::future::ready;

    fn file(id: &str, creator: &str) -> entities::File {
        entities::File {
            id: entities::FileId::from(id),
            creator: entities::UserId::from(creator),
            last_edited: entities::LastEdited::from(1),
            version_id: entities::VersionId::new(),
        }
    }

    #[tokio::test]
    async fn test_get_creations_only_returns_own_rows() {
        let mut repo = FilesRepositoryImpl::new(memory_pool().await);
        repo.insert(&file("a", "u1")).await.unwrap();
        repo.insert(&file("b", "u2")).await.unwrap();
        repo.insert(&file("c", "u1")).await.unwrap();

        let u1 = entities::UserId::from("u1");
        let files = get_creations(&mut repo, &u1, |file| ready(Ok(file)))
            .await
            .unwrap();
        assert_eq!(files, vec![file("a", "u1"), file("c", "u1")]);

        let nobody = entities::UserId::from("u3");
        let ids = get_creations(&mut repo, &nobody, |file| ready(Ok(file.id)))
            .await
            .unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_get_creations_maps_in_row_order() {
        let mut repo = FilesRepositoryImpl::new(memory_pool().await);
        let mut storage = MemoryStorageImpl::new();
        for (id, text) in [("a", "first"), ("b", "second"), ("c", "third")] {
            repo.insert(&file(id, "u1")).await.unwrap();
            storage.put(id, text.to_string()).await.unwrap();
        }

        let u1 = entities::UserId::from("u1");
        let texts = get_creations(&mut repo, &u1, |file| {
            let mut storage = storage.clone();
            async move { content(file.id.as_str(), &mut storage).await }
        })
        .await
        .unwrap();

        assert_eq!(
            texts,
            vec![
                Some("first".to_string()),
                Some("second".to_string()),
                Some("third".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_get_creations_fails_when_mapping_fails() {
        let mut repo = FilesRepositoryImpl::new(memory_pool().await);
        repo.insert(&file("a", "u1")).await.unwrap();
        repo.insert(&file("b", "u1")).await.unwrap();

        let u1 = entities::UserId::from("u1");
        let result = get_creations(&mut repo, &u1, |file| {
            ready(if file.id.as_str() == "a" {
                Err(anyhow!("cannot map a"))
            } else {
                Ok(file)
            })
        })
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_content_missing_is_none() {
        let mut storage = MemoryStorageImpl::new();
        assert_eq!(content("nothing", &mut storage).await.unwrap(), None);
    }
}
