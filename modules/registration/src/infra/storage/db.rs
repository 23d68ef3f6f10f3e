//! `SQLite` connection setup.
//!
//! Connection options are built as typed sqlx options instead of DSN
//! strings. The pool holds a single connection: writes come from one session
//! at a time, and an in-memory database lives exactly as long as that
//! connection.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};

use crate::config::DatabaseConfig;
use crate::domain::error::StorageError;

const MEMORY_DSN: &str = "sqlite::memory:";

/// Opens the record store described by `cfg`.
///
/// For a file store the parent directories are created and the file is
/// created if missing.
///
/// # Errors
/// Returns [`StorageError::Unavailable`] when the directory cannot be created
/// or the database cannot be opened.
pub async fn connect(
    cfg: &DatabaseConfig,
    home_dir: &Path,
) -> Result<DatabaseConnection, StorageError> {
    let options = if cfg.in_memory {
        tracing::debug!("opening in-memory record store");
        SqliteConnectOptions::from_str(MEMORY_DSN).map_err(unavailable)?
    } else {
        let path = cfg.resolve_path(home_dir);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Unavailable(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        tracing::debug!(path = %path.display(), "opening record store");
        SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options.busy_timeout(cfg.busy_timeout()))
        .await
        .map_err(unavailable)?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

fn unavailable(err: sea_orm::sqlx::Error) -> StorageError {
    StorageError::Unavailable(err.to_string())
}
