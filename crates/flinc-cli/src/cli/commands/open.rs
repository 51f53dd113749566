//! `flinc open ORIGIN DESTINATION ...` – open each site in a private window.

use anyhow::{bail, Result};
use flinc_core::airports;
use flinc_core::config::FlincConfig;
use flinc_core::history_db::HistoryDb;
use flinc_core::launcher::{launch_all, Browser, IncognitoLauncher};
use flinc_core::search::{RawSearch, SearchRequest};
use flinc_core::sites;
use std::time::Duration;

use super::validated;

#[derive(Debug, Clone)]
pub struct OpenOptions {
    pub browser: Browser,
    pub delay: Duration,
    pub save_history: bool,
}

impl OpenOptions {
    /// Command-line choices over config defaults.
    pub fn new(cfg: &FlincConfig, browser: Option<Browser>, no_history: bool) -> Self {
        Self {
            browser: browser.unwrap_or(cfg.default_browser),
            delay: cfg.launch_delay(),
            save_history: cfg.save_history && !no_history,
        }
    }
}

pub async fn run_open(
    raw: &RawSearch,
    launcher: &dyn IncognitoLauncher,
    opts: &OpenOptions,
    history: Option<&HistoryDb>,
) -> Result<()> {
    let req = validated(raw)?;
    open_request(&req, launcher, opts, history).await
}

/// Launch every link for an already-validated request, then record it.
/// A history failure is only a warning; the search itself went through.
pub async fn open_request(
    req: &SearchRequest,
    launcher: &dyn IncognitoLauncher,
    opts: &OpenOptions,
    history: Option<&HistoryDb>,
) -> Result<()> {
    let links = sites::generate(req)?;
    println!(
        "Opening {} site(s) for {} in {} (private)",
        links.len(),
        route_with_cities(req),
        opts.browser
    );

    let outcomes = launch_all(launcher, opts.browser, &links, opts.delay);
    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!("  ok    {}", outcome.site.display_name()),
            Err(e) => {
                failed += 1;
                println!("  FAIL  {}: {}", outcome.site.display_name(), e);
            }
        }
    }

    if opts.save_history {
        if let Some(db) = history {
            match db.save(req).await {
                Ok(id) => tracing::debug!(id, "search recorded"),
                Err(e) => {
                    tracing::warn!("could not save search: {:#}", e);
                    eprintln!("warning: search not saved to history: {e:#}");
                }
            }
        }
    }

    if !outcomes.is_empty() && failed == outcomes.len() {
        bail!("could not open {} on any site", opts.browser);
    }
    Ok(())
}

/// `SFO → JFK (San Francisco → New York)` when both codes are known.
fn route_with_cities(req: &SearchRequest) -> String {
    match (airports::lookup(&req.origin), airports::lookup(&req.destination)) {
        (Some(from), Some(to)) => format!("{} ({} → {})", req.route_label(), from.city, to.city),
        _ => req.route_label(),
    }
}
