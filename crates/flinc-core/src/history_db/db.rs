//! SQLite-backed history database.
//!
//! Handles connection, migrations, and timestamp helpers. Row CRUD lives in `searches`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Default database location: `~/.local/state/flinc/history.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("flinc")?;
    Ok(xdg_dirs.get_state_home().join("flinc").join("history.db"))
}

/// Handle to the search history database.
#[derive(Clone)]
pub struct HistoryDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl HistoryDb {
    /// Open (or create) the default history database and run migrations.
    pub async fn open_default() -> Result<Self> {
        Self::open_at(default_db_path()?).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        // One user action per process; a single connection is plenty.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&uri)
            .await?;
        let db = HistoryDb { pool };
        db.migrate().await?;
        tracing::debug!(path = %path.display(), "history db ready");
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // Dates are ISO `YYYY-MM-DD` text; `sites` is a comma-separated list
        // of site ids; `created_at` is Unix seconds.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS search_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                origin TEXT NOT NULL,
                destination TEXT NOT NULL,
                depart_date TEXT NOT NULL,
                return_date TEXT,
                trip_type TEXT NOT NULL,
                cabin TEXT NOT NULL DEFAULT 'economy',
                adults INTEGER NOT NULL DEFAULT 1,
                children INTEGER NOT NULL DEFAULT 0,
                infants INTEGER NOT NULL DEFAULT 0,
                sites TEXT NOT NULL DEFAULT '',
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_search_created_at ON search_history(created_at DESC)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_search_route ON search_history(origin, destination)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for DB timestamps).
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<HistoryDb> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = HistoryDb { pool };
    db.migrate().await?;
    Ok(db)
}
