//! `flinc preview ORIGIN DESTINATION ...` – print links without launching.

use anyhow::{Context, Result};
use flinc_core::preview::{self, PreviewFormat};
use flinc_core::search::{RawSearch, SearchRequest};
use flinc_core::sites;
use std::path::Path;

use super::validated;

pub async fn run_preview(raw: &RawSearch, format: PreviewFormat, output: Option<&Path>) -> Result<()> {
    let req = validated(raw)?;
    preview_request(&req, format, output).await
}

/// Render links for `req` to stdout, or to `output` when given.
pub async fn preview_request(
    req: &SearchRequest,
    format: PreviewFormat,
    output: Option<&Path>,
) -> Result<()> {
    let links = sites::generate(req)?;
    let rendered = preview::render(req, &links, format);
    match output {
        Some(path) => {
            tokio::fs::write(path, &rendered)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} link(s) to {}", links.len(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
