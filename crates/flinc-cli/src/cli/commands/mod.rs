//! CLI command handlers, one per file.

mod airports;
mod clear;
mod completions;
mod delete;
mod history;
mod open;
mod preview;
mod rerun;
mod sites;

pub use airports::run_airports;
pub use clear::run_clear;
pub use completions::run_completions;
pub use delete::run_delete;
pub use history::run_history;
pub use open::{open_request, run_open, OpenOptions};
pub use preview::{preview_request, run_preview};
pub use rerun::{run_rerun, RerunMode};
pub use sites::run_sites;

use anyhow::{bail, Result};
use flinc_core::search::{self, RawSearch, SearchRequest};

/// Validate form input, printing every problem before failing.
pub(crate) fn validated(raw: &RawSearch) -> Result<SearchRequest> {
    match search::validate(raw) {
        Ok(req) => Ok(req),
        Err(errors) => {
            for e in &errors {
                eprintln!("  - {e}");
            }
            bail!("invalid search ({} problem(s))", errors.len())
        }
    }
}
