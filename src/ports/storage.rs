/// Text blob store keyed by file id.
#[allow(async_fn_in_trait)]
pub trait Storage {
    type Error;

    /// `Ok(None)` when nothing is stored under `key`.
    async fn get(&mut self, key: &str) -> Result<Option<String>, Self::Error>;

    async fn put(&mut self, key: &str, data: String) -> Result<(), Self::Error>;

    /// Removing a missing key is not an error.
    async fn delete(&mut self, key: &str) -> Result<(), Self::Error>;

    async fn list_keys(&mut self) -> Result<Vec<String>, Self::Error>;
}
