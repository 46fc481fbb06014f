use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

// a single connection keeps every query on the same in-memory database
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::MIGRATOR.run(&pool).await.unwrap();
    pool
}
