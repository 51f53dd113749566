//! Browser launcher: open deep links in a private/incognito window.
//!
//! Process spawning sits behind [`IncognitoLauncher`] so callers (and tests)
//! can swap in a fake. [`SystemLauncher`] walks the per-platform candidate
//! list from [`candidates`] and spawns the first program it finds. Launches
//! are fire-and-forget: the browser process is never awaited, and a failure
//! for one site does not stop the others.

mod browser;
mod platform;

pub use browser::Browser;
pub use platform::{candidates, LaunchCommand, Platform};

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use crate::sites::{GeneratedResult, SiteId};

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("{browser} not found (tried: {tried})")]
    NotFound { browser: Browser, tried: String },
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{browser} is not supported on {platform}")]
    Unsupported { browser: Browser, platform: Platform },
}

/// Opens a URL in a fresh private window.
pub trait IncognitoLauncher {
    fn open_incognito(&self, browser: Browser, url: &str) -> Result<(), LaunchError>;
}

/// Launcher that spawns real browser processes.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    platform: Platform,
    overrides: BTreeMap<Browser, PathBuf>,
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl SystemLauncher {
    /// `overrides` maps a browser to an explicit executable, tried first.
    pub fn new(overrides: BTreeMap<Browser, PathBuf>) -> Self {
        Self {
            platform: Platform::current(),
            overrides,
        }
    }
}

impl IncognitoLauncher for SystemLauncher {
    fn open_incognito(&self, browser: Browser, url: &str) -> Result<(), LaunchError> {
        let plan = candidates(
            browser,
            self.platform,
            self.overrides.get(&browser).map(PathBuf::as_path),
        );
        if plan.is_empty() {
            return Err(LaunchError::Unsupported {
                browser,
                platform: self.platform,
            });
        }

        for cmd in &plan {
            let spawned = Command::new(&cmd.program)
                .args(&cmd.args)
                .arg(url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                Ok(child) => {
                    tracing::debug!(program = %cmd.program.display(), pid = child.id(), "browser spawned");
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(program = %cmd.program.display(), "not found, trying next");
                }
                Err(source) => {
                    return Err(LaunchError::Spawn {
                        program: cmd.program.display().to_string(),
                        source,
                    });
                }
            }
        }

        Err(LaunchError::NotFound {
            browser,
            tried: plan
                .iter()
                .map(|c| c.program.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Result of launching one site.
#[derive(Debug)]
pub struct LaunchOutcome {
    pub site: SiteId,
    pub result: Result<(), LaunchError>,
}

impl LaunchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Open every generated link, pausing `delay` between launches. Never stops
/// early; each site's outcome is reported.
pub fn launch_all(
    launcher: &dyn IncognitoLauncher,
    browser: Browser,
    result: &GeneratedResult,
    delay: Duration,
) -> Vec<LaunchOutcome> {
    let mut outcomes = Vec::with_capacity(result.len());
    for (i, entry) in result.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            std::thread::sleep(delay);
        }
        let outcome = launcher.open_incognito(browser, &entry.url);
        match &outcome {
            Ok(()) => tracing::info!(site = %entry.site, %browser, "opened"),
            Err(e) => tracing::warn!(site = %entry.site, %browser, "launch failed: {}", e),
        }
        outcomes.push(LaunchOutcome {
            site: entry.site,
            result: outcome,
        });
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::GeneratedUrl;
    use std::cell::RefCell;

    /// Records calls; fails for URLs containing `fail_on`.
    struct RecordingLauncher {
        calls: RefCell<Vec<(Browser, String)>>,
        fail_on: &'static str,
    }

    impl IncognitoLauncher for RecordingLauncher {
        fn open_incognito(&self, browser: Browser, url: &str) -> Result<(), LaunchError> {
            self.calls.borrow_mut().push((browser, url.to_string()));
            if url.contains(self.fail_on) {
                Err(LaunchError::NotFound {
                    browser,
                    tried: "fake".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn result() -> GeneratedResult {
        GeneratedResult {
            entries: vec![
                GeneratedUrl {
                    site: SiteId::GoogleFlights,
                    url: "https://www.google.com/travel/flights?q=x".to_string(),
                },
                GeneratedUrl {
                    site: SiteId::Kayak,
                    url: "https://www.kayak.com/flights/x".to_string(),
                },
                GeneratedUrl {
                    site: SiteId::Expedia,
                    url: "https://www.expedia.com/go/flight/search/x".to_string(),
                },
            ],
        }
    }

    #[test]
    fn one_failure_does_not_stop_the_rest() {
        let launcher = RecordingLauncher {
            calls: RefCell::new(Vec::new()),
            fail_on: "kayak",
        };
        let outcomes = launch_all(&launcher, Browser::Firefox, &result(), Duration::ZERO);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_ok());
        assert!(!outcomes[1].is_ok());
        assert!(outcomes[2].is_ok());
        assert_eq!(outcomes[1].site, SiteId::Kayak);

        let calls = launcher.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|(b, _)| *b == Browser::Firefox));
        assert_eq!(calls[2].1, "https://www.expedia.com/go/flight/search/x");
    }

    #[test]
    fn missing_override_binary_reports_not_found() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            Browser::Chrome,
            PathBuf::from("/nonexistent/flinc-test/chrome"),
        );
        let launcher = SystemLauncher {
            platform: Platform::Other,
            overrides,
        };
        match launcher.open_incognito(Browser::Chrome, "https://example.com") {
            Err(LaunchError::NotFound { browser, tried }) => {
                assert_eq!(browser, Browser::Chrome);
                assert!(tried.contains("/nonexistent/flinc-test/chrome"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_platform_without_override() {
        let launcher = SystemLauncher {
            platform: Platform::Other,
            overrides: BTreeMap::new(),
        };
        assert!(matches!(
            launcher.open_incognito(Browser::Edge, "https://example.com"),
            Err(LaunchError::Unsupported { .. })
        ));
    }
}
