use std::io;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use creations_backend::adapters::{FilesRepositoryImpl, LocalStorageImpl, StorageImpl};
use creations_backend::app_config::{AppConfig, StorageConfig};
use creations_backend::commands::maintenance_command::{self, SweepMode};
use creations_backend::{ports, MIGRATOR};

async fn sweep<S>(pool: SqlitePool, mut storage: S, mode: SweepMode) -> anyhow::Result<()>
where
    S: ports::Storage<Error = anyhow::Error>,
{
    let mut repo = FilesRepositoryImpl::new(pool);
    let orphans = maintenance_command::sweep_orphans(&mut repo, &mut storage, mode).await?;
    for key in orphans {
        match mode {
            SweepMode::DryRun => log::info!("orphan blob {}", key),
            SweepMode::Delete => log::info!("removed orphan blob {}", key),
        }
    }
    Ok(())
}

async fn migrate_and_maintain(config: AppConfig) -> anyhow::Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    MIGRATOR.run(&pool).await?;
    log::info!("migrations applied");

    let Some(mode) = config.sweep_orphans else {
        return Ok(());
    };

    match config.storage {
        StorageConfig::S3 { bucket, prefix } => {
            let sdk_config = aws_config::load_from_env().await;
            let client = aws_sdk_s3::Client::new(&sdk_config);
            sweep(pool, StorageImpl::new(bucket, prefix, client), mode).await
        }
        StorageConfig::Local { root } => sweep(pool, LocalStorageImpl::new(root), mode).await,
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = AppConfig::from_env().map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    migrate_and_maintain(config)
        .await
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}
