use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::launcher::Browser;
use crate::search::CabinClass;
use crate::sites::{self, SiteId};

/// Global configuration loaded from `~/.config/flinc/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlincConfig {
    /// Browser used when `--browser` is not given.
    pub default_browser: Browser,
    /// Cabin used when `--cabin` is not given.
    pub default_cabin: CabinClass,
    /// Sites searched when no `--site`/`--all-sites`/`--top-sites` is given.
    pub default_sites: Vec<SiteId>,
    /// Pause between opening consecutive windows, in milliseconds.
    pub launch_delay_ms: u64,
    /// Record each submitted search in the history database.
    pub save_history: bool,
    /// Executable overrides, e.g. `chrome = "/opt/google/chrome/chrome"`.
    pub browser_paths: BTreeMap<Browser, PathBuf>,
}

impl Default for FlincConfig {
    fn default() -> Self {
        Self {
            default_browser: Browser::default(),
            default_cabin: CabinClass::default(),
            default_sites: sites::default_sites(),
            launch_delay_ms: 300,
            save_history: true,
            browser_paths: BTreeMap::new(),
        }
    }
}

impl FlincConfig {
    pub fn launch_delay(&self) -> Duration {
        Duration::from_millis(self.launch_delay_ms)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("flinc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FlincConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<FlincConfig> {
    if !path.exists() {
        let default_cfg = FlincConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: FlincConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
