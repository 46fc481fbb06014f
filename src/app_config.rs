use anyhow::{anyhow, Context};
use std::env;
use std::path::PathBuf;

use crate::commands::maintenance_command::SweepMode;

const DEFAULT_S3_PREFIX: &str = "user_creations/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    S3 { bucket: String, prefix: String },
    Local { root: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub storage: StorageConfig,
    pub sweep_orphans: Option<SweepMode>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<AppConfig> {
        Self::from_vars(|key| env::var(key))
    }

    pub fn from_vars(
        var: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> anyhow::Result<AppConfig> {
        let database_url = var("DATABASE_URL").context("DATABASE_URL")?;
        let storage = match var("STORAGE_KIND").context("STORAGE_KIND")?.as_str() {
            "S3" => {
                let bucket = var("STORAGE_S3_BUCKET").context("STORAGE_S3_BUCKET")?;
                let prefix =
                    var("STORAGE_S3_PREFIX").unwrap_or_else(|_| DEFAULT_S3_PREFIX.to_owned());
                StorageConfig::S3 { bucket, prefix }
            }
            "LOCAL" => {
                let root = var("STORAGE_LOCAL_ROOT").context("STORAGE_LOCAL_ROOT")?;
                StorageConfig::Local {
                    root: PathBuf::from(root),
                }
            }
            _ => Err(anyhow!("Invalid storage kind"))?,
        };
        let sweep_orphans = match var("SWEEP_ORPHANS").as_deref() {
            Ok("TRUE") => Some(SweepMode::Delete),
            Ok("DRY_RUN") => Some(SweepMode::DryRun),
            _ => None,
        };

        Ok(AppConfig {
            database_url,
            storage,
            sweep_orphans,
        })
    }
}
