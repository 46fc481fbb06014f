pub mod adapters;
pub mod app_config;
pub mod async_util;
pub mod commands;
pub mod entities;
pub mod ports;
pub mod queries;

#[cfg(test)]
mod test_util;

pub use async_util::{attempt, attempt_ignoring, delay, sequential};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
