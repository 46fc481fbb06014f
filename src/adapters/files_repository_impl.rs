use crate::{entities, ports};
use anyhow::Context;
use sqlx::{Acquire, Sqlite};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FileModel {
    pub id: String,
    pub creator: String,
    #[sqlx(rename = "lastEdited")]
    pub last_edited: i64,
    #[sqlx(rename = "versionId")]
    pub version_id: i64,
}

impl FileModel {
    pub fn into_entity(self) -> anyhow::Result<entities::File> {
        Ok(entities::File {
            id: entities::FileId::from(self.id),
            creator: entities::UserId::from(self.creator),
            last_edited: entities::LastEdited::from(self.last_edited),
            version_id: entities::VersionId::try_from(self.version_id)
                .context("versionId conversion error")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FilesRepositoryImpl<A> {
    db: A,
}

impl<A> FilesRepositoryImpl<A> {
    pub fn new(db: A) -> Self {
        Self { db }
    }
}

impl<A> ports::FilesRepository for FilesRepositoryImpl<A>
where
    A: Send,
    for<'c> &'c A: Acquire<'c, Database = Sqlite>,
{
    type Error = anyhow::Error;

    async fn get_by_creator(
        &mut self,
        user_id: &entities::UserId,
    ) -> Result<Vec<entities::File>, Self::Error> {
        let mut conn = self.db.acquire().await?;

        let models = sqlx::query_as::<_, FileModel>("SELECT * FROM user_creations WHERE creator = ?")
            .bind(user_id.as_str())
            .fetch_all(&mut *conn)
            .await
            .context("fetch user_creations")?;

        let files = models
            .into_iter()
            .map(|model| model.into_entity())
            .collect::<anyhow::Result<Vec<_>>>()
            .context("convert File")?;

        Ok(files)
    }

    async fn delete(
        &mut self,
        user_id: &entities::UserId,
        id: &entities::FileId,
    ) -> Result<u64, Self::Error> {
        let mut conn = self.db.acquire().await?;

        let result = sqlx::query("DELETE FROM user_creations WHERE id = ? AND creator = ?")
            .bind(id.as_str())
            .bind(user_id.as_str())
            .execute(&mut *conn)
            .await
            .context("delete user_creation")?;

        Ok(result.rows_affected())
    }

    async fn update(&mut self, file: &entities::File) -> Result<u64, Self::Error> {
        let mut conn = self.db.acquire().await?;

        let result = sqlx::query(
            "UPDATE user_creations SET lastEdited = ?, versionId = ? WHERE id = ? AND creator = ?",
        )
        .bind(i64::from(file.last_edited))
        .bind(i64::from(file.version_id))
        .bind(file.id.as_str())
        .bind(file.creator.as_str())
        .execute(&mut *conn)
        .await
        .context("update user_creation")?;

        Ok(result.rows_affected())
    }

    async fn insert(&mut self, file: &entities::File) -> Result<(), Self::Error> {
        let mut conn = self.db.acquire().await?;

        sqlx::query(
            "INSERT INTO user_creations (id, lastEdited, versionId, creator) VALUES (?, ?, ?, ?)",
        )
        .bind(file.id.as_str())
        .bind(i64::from(file.last_edited))
        .bind(i64::from(file.version_id))
        .bind(file.creator.as_str())
        .execute(&mut *conn)
        .await
        .context("insert user_creation")?;

        Ok(())
    }

    async fn all_ids(&mut self) -> Result<Vec<entities::FileId>, Self::Error> {
        let mut conn = self.db.acquire().await?;

        let ids = sqlx::query_scalar::<_, String>("SELECT id FROM user_creations")
            .fetch_all(&mut *conn)
            .await
            .context("fetch user_creation ids")?;

        Ok(ids.into_iter().map(entities::FileId::from).collect())
    }
}
