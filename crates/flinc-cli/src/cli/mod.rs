//! CLI for flinc.

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use flinc_core::config::{self, FlincConfig};
use flinc_core::history_db::{HistoryDb, HistoryFilter};
use flinc_core::launcher::{Browser, SystemLauncher};
use flinc_core::preview::PreviewFormat;
use flinc_core::search::{CabinClass, RawSearch, TripType};
use flinc_core::sites;
use std::path::PathBuf;

use commands::{
    run_airports, run_clear, run_completions, run_delete, run_history, run_open, run_preview,
    run_rerun, run_sites, OpenOptions, RerunMode,
};

/// Top-level CLI for flinc.
#[derive(Debug, Parser)]
#[command(name = "flinc")]
#[command(
    about = "flinc: open flight searches on several sites in private browser windows",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Trip parameters shared by `open` and `preview`.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Origin airport code (e.g. SFO).
    pub origin: String,

    /// Destination airport code (e.g. JFK).
    pub destination: String,

    /// Departure date.
    #[arg(long, short = 'd', value_name = "YYYY-MM-DD")]
    pub depart: Option<NaiveDate>,

    /// Return date. Implies a round trip unless --one-way is given.
    #[arg(long = "return", short = 'r', value_name = "YYYY-MM-DD")]
    pub return_date: Option<NaiveDate>,

    /// One-way trip; any --return is ignored.
    #[arg(long)]
    pub one_way: bool,

    /// Cabin class (economy, premium-economy, business, first). Defaults to config.
    #[arg(long, short = 'c')]
    pub cabin: Option<CabinClass>,

    #[arg(long, default_value_t = 1)]
    pub adults: u32,

    #[arg(long, default_value_t = 0)]
    pub children: u32,

    /// Infants travelling on a lap.
    #[arg(long, default_value_t = 0)]
    pub infants: u32,

    /// Site to search (id or name); repeatable. Defaults to config.
    #[arg(long = "site", short = 's', value_name = "SITE")]
    pub sites: Vec<String>,

    /// Search every supported site.
    #[arg(long, conflicts_with_all = ["sites", "top_sites"])]
    pub all_sites: bool,

    /// Search the four most popular sites.
    #[arg(long, conflicts_with = "sites")]
    pub top_sites: bool,
}

impl SearchArgs {
    /// Form input for validation, with config defaults filled in.
    pub fn to_raw(&self, cfg: &FlincConfig) -> RawSearch {
        let trip_type = if self.one_way || self.return_date.is_none() {
            TripType::OneWay
        } else {
            TripType::RoundTrip
        };
        let sites: Vec<String> = if self.all_sites {
            site_names(&sites::all_sites())
        } else if self.top_sites {
            site_names(&sites::top_sites())
        } else if self.sites.is_empty() {
            site_names(&cfg.default_sites)
        } else {
            self.sites.clone()
        };
        RawSearch {
            trip_type,
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            depart_date: self.depart,
            return_date: self.return_date,
            cabin: self.cabin.unwrap_or(cfg.default_cabin),
            adults: self.adults,
            children: self.children,
            infants: self.infants,
            sites,
        }
    }
}

fn site_names(ids: &[sites::SiteId]) -> Vec<String> {
    ids.iter().map(|s| s.as_str().to_string()).collect()
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Open the search on each selected site in a private browser window.
    Open {
        #[command(flatten)]
        search: SearchArgs,

        /// Browser to use (chrome, firefox, edge, brave). Defaults to config.
        #[arg(long, short = 'b')]
        browser: Option<Browser>,

        /// Do not record this search in history.
        #[arg(long)]
        no_history: bool,
    },

    /// Print the generated links without opening a browser.
    Preview {
        #[command(flatten)]
        search: SearchArgs,

        /// Output format (text, html, markdown, json).
        #[arg(long, short = 'f', default_value = "text")]
        format: PreviewFormat,

        /// Write to a file instead of stdout.
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List past searches grouped by day, with totals and popular routes.
    History {
        /// Show at most N searches.
        #[arg(long, short = 'n', default_value_t = 50, value_name = "N")]
        limit: u32,

        /// Only searches from this origin.
        #[arg(long)]
        origin: Option<String>,

        /// Only searches to this destination.
        #[arg(long)]
        destination: Option<String>,

        /// Number of popular routes to show (0 hides them).
        #[arg(long, default_value_t = 5, value_name = "N")]
        popular: u32,
    },

    /// Run a past search again.
    Rerun {
        /// History entry id.
        id: i64,

        /// Print links instead of opening them.
        #[arg(long)]
        preview: bool,

        /// Output format for --preview.
        #[arg(long, short = 'f', default_value = "text")]
        format: PreviewFormat,

        /// Browser to use. Defaults to config.
        #[arg(long, short = 'b', conflicts_with = "preview")]
        browser: Option<Browser>,

        /// Do not record the re-run in history.
        #[arg(long)]
        no_history: bool,
    },

    /// Delete one past search by id.
    Delete {
        /// History entry id.
        id: i64,
    },

    /// Delete all past searches.
    Clear {
        /// Confirm deletion.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Look up airports by code, city, or name.
    Airports {
        query: String,

        /// Maximum number of matches.
        #[arg(long, short = 'n', default_value_t = flinc_core::airports::DEFAULT_LIMIT)]
        limit: usize,
    },

    /// List supported sites.
    Sites,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Open {
                search,
                browser,
                no_history,
            } => {
                let opts = OpenOptions::new(&cfg, browser, no_history);
                let history = if opts.save_history {
                    open_history_or_warn().await
                } else {
                    None
                };
                let launcher = SystemLauncher::new(cfg.browser_paths.clone());
                run_open(&search.to_raw(&cfg), &launcher, &opts, history.as_ref()).await?;
            }
            CliCommand::Preview {
                search,
                format,
                output,
            } => run_preview(&search.to_raw(&cfg), format, output.as_deref()).await?,
            CliCommand::History {
                limit,
                origin,
                destination,
                popular,
            } => {
                let db = HistoryDb::open_default().await?;
                let filter = HistoryFilter {
                    limit: Some(limit),
                    origin,
                    destination,
                };
                run_history(&db, &filter, popular).await?;
            }
            CliCommand::Rerun {
                id,
                preview,
                format,
                browser,
                no_history,
            } => {
                let db = HistoryDb::open_default().await?;
                let mode = if preview {
                    RerunMode::Preview(format)
                } else {
                    RerunMode::Open(OpenOptions::new(&cfg, browser, no_history))
                };
                let launcher = SystemLauncher::new(cfg.browser_paths.clone());
                run_rerun(&db, id, mode, &launcher).await?;
            }
            CliCommand::Delete { id } => {
                let db = HistoryDb::open_default().await?;
                run_delete(&db, id).await?;
            }
            CliCommand::Clear { yes } => {
                let db = HistoryDb::open_default().await?;
                run_clear(&db, yes).await?;
            }
            CliCommand::Airports { query, limit } => run_airports(&query, limit),
            CliCommand::Sites => run_sites(&cfg),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

/// History is optional for `open`: a broken database only costs the record.
async fn open_history_or_warn() -> Option<HistoryDb> {
    match HistoryDb::open_default().await {
        Ok(db) => Some(db),
        Err(e) => {
            tracing::warn!("history unavailable: {:#}", e);
            eprintln!("warning: search history unavailable: {e:#}");
            None
        }
    }
}

#[cfg(test)]
mod tests;
