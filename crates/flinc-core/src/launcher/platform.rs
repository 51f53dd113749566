//! Per-platform launch candidates. Pure: nothing here touches the filesystem.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use super::Browser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Linux => "Linux",
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
            Platform::Other => "this platform",
        })
    }
}

/// A program plus its leading arguments; the URL is appended when spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl LaunchCommand {
    fn new(program: impl Into<PathBuf>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Programs to try, in order, to open `browser` privately on `platform`.
/// A configured `override_path` always comes first.
pub fn candidates(
    browser: Browser,
    platform: Platform,
    override_path: Option<&Path>,
) -> Vec<LaunchCommand> {
    let flag = browser.private_flag();
    let mut out = Vec::new();
    if let Some(path) = override_path {
        out.push(LaunchCommand::new(path, &[flag]));
    }

    match platform {
        Platform::MacOs => {
            let app = match browser {
                Browser::Chrome => "Google Chrome",
                Browser::Firefox => "Firefox",
                Browser::Edge => "Microsoft Edge",
                Browser::Brave => "Brave Browser",
            };
            out.push(LaunchCommand::new("open", &["-na", app, "--args", flag]));
        }
        Platform::Windows => {
            let (paths, bare): (&[&str], &str) = match browser {
                Browser::Chrome => (
                    &[
                        r"C:\Program Files\Google\Chrome\Application\chrome.exe",
                        r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
                    ],
                    "chrome.exe",
                ),
                Browser::Firefox => (
                    &[
                        r"C:\Program Files\Mozilla Firefox\firefox.exe",
                        r"C:\Program Files (x86)\Mozilla Firefox\firefox.exe",
                    ],
                    "firefox.exe",
                ),
                Browser::Edge => (
                    &[
                        r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe",
                        r"C:\Program Files\Microsoft\Edge\Application\msedge.exe",
                    ],
                    "msedge.exe",
                ),
                Browser::Brave => (
                    &[
                        r"C:\Program Files\BraveSoftware\Brave-Browser\Application\brave.exe",
                        r"C:\Program Files (x86)\BraveSoftware\Brave-Browser\Application\brave.exe",
                    ],
                    "brave.exe",
                ),
            };
            out.extend(paths.iter().map(|p| LaunchCommand::new(*p, &[flag])));
            out.push(LaunchCommand::new(bare, &[flag]));
        }
        Platform::Linux => {
            let names: &[&str] = match browser {
                Browser::Chrome => &[
                    "google-chrome",
                    "google-chrome-stable",
                    "chromium",
                    "chromium-browser",
                ],
                Browser::Firefox => &["firefox", "firefox-esr"],
                Browser::Edge => &["microsoft-edge", "microsoft-edge-stable"],
                Browser::Brave => &["brave-browser", "brave"],
            };
            out.extend(names.iter().map(|n| LaunchCommand::new(*n, &[flag])));
        }
        Platform::Other => {}
    }
    out
}
