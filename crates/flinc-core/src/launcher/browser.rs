use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::search::{normalize, ParseEnumError};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Chrome,
    Firefox,
    Edge,
    Brave,
}

impl Browser {
    pub const ALL: [Browser; 4] = [Browser::Chrome, Browser::Firefox, Browser::Edge, Browser::Brave];

    /// Command-line flag that opens a private window.
    pub fn private_flag(self) -> &'static str {
        match self {
            Browser::Chrome | Browser::Brave => "--incognito",
            Browser::Firefox => "-private-window",
            Browser::Edge => "--inprivate",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
            Browser::Edge => "edge",
            Browser::Brave => "brave",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Browser::Chrome => "Chrome",
            Browser::Firefox => "Firefox",
            Browser::Edge => "Edge",
            Browser::Brave => "Brave",
        })
    }
}

impl FromStr for Browser {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "chrome" | "google-chrome" | "chromium" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            "edge" | "msedge" | "microsoft-edge" => Ok(Browser::Edge),
            "brave" => Ok(Browser::Brave),
            _ => Err(ParseEnumError {
                kind: "browser",
                value: s.to_string(),
                expected: "chrome, firefox, edge, brave",
            }),
        }
    }
}
