//! Types used by the history database.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::search::SearchRequest;

/// Row identifier.
pub type HistoryId = i64;

/// One stored search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: HistoryId,
    pub request: SearchRequest,
    /// Unix seconds.
    pub created_at: i64,
}

impl HistoryEntry {
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.created_at, 0).unwrap_or_default()
    }
}

/// Narrows `HistoryDb::list`. Empty filter lists everything.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub limit: Option<u32>,
    /// Exact airport code, upper-case.
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl HistoryFilter {
    pub fn recent(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Aggregate for the "popular routes" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteCount {
    pub origin: String,
    pub destination: String,
    pub search_count: i64,
    /// Unix seconds of the most recent search on this route.
    pub last_searched: i64,
}
