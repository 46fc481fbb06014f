use crate::entities;

/// Row store for `user_creations`. Every statement that reads or mutates a
/// user's rows is scoped by `creator`; authentication happens upstream.
#[allow(async_fn_in_trait)]
pub trait FilesRepository {
    type Error;

    async fn get_by_creator(
        &mut self,
        user_id: &entities::UserId,
    ) -> Result<Vec<entities::File>, Self::Error>;

    /// Returns the number of rows removed, which is zero when `id` is not owned by `user_id`.
    async fn delete(
        &mut self,
        user_id: &entities::UserId,
        id: &entities::FileId,
    ) -> Result<u64, Self::Error>;

    async fn update(&mut self, file: &entities::File) -> Result<u64, Self::Error>;

    async fn insert(&mut self, file: &entities::File) -> Result<(), Self::Error>;

    async fn all_ids(&mut self) -> Result<Vec<entities::FileId>, Self::Error>;
}
