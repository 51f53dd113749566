//! `flinc rerun <id>` – run a saved search again.

use anyhow::{anyhow, Result};
use flinc_core::history_db::HistoryDb;
use flinc_core::launcher::IncognitoLauncher;
use flinc_core::preview::PreviewFormat;

use super::{open_request, preview_request, OpenOptions};

#[derive(Debug, Clone)]
pub enum RerunMode {
    Open(OpenOptions),
    Preview(PreviewFormat),
}

pub async fn run_rerun(
    db: &HistoryDb,
    id: i64,
    mode: RerunMode,
    launcher: &dyn IncognitoLauncher,
) -> Result<()> {
    let entry = db
        .get(id)
        .await?
        .ok_or_else(|| anyhow!("no saved search with id {id}"))?;
    tracing::info!(id, route = %entry.request.route_label(), "re-running saved search");

    match mode {
        RerunMode::Open(opts) => open_request(&entry.request, launcher, &opts, Some(db)).await,
        RerunMode::Preview(format) => preview_request(&entry.request, format, None).await,
    }
}
