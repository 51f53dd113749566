//! `flinc clear --yes` – delete all saved searches.

use anyhow::Result;
use flinc_core::history_db::HistoryDb;

pub async fn run_clear(db: &HistoryDb, yes: bool) -> Result<()> {
    if !yes {
        let n = db.count().await?;
        println!("This deletes {n} saved search(es). Re-run with --yes to confirm.");
        return Ok(());
    }
    let removed = db.clear().await?;
    println!("Deleted {removed} saved search(es)");
    Ok(())
}
