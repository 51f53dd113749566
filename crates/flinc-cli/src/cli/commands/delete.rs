//! `flinc delete <id>` – delete one saved search.

use anyhow::{bail, Result};
use flinc_core::history_db::HistoryDb;

pub async fn run_delete(db: &HistoryDb, id: i64) -> Result<()> {
    if !db.delete(id).await? {
        bail!("no saved search with id {id}");
    }
    println!("Deleted search {id}");
    Ok(())
}
