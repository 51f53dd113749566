//! Site URL builder: one deep-link grammar per flight-search site.
//!
//! The catalog is a static table of [`SiteDefinition`]s, each carrying a pure
//! builder function. Builders never do I/O and depend on nothing but the
//! request, so `build` is deterministic for a given request and catalog.
//!
//! Third-party URL grammars drift independently of this crate; each builder
//! reflects what the site accepted when it was last checked.

mod cheapoair;
mod expedia;
mod google;
mod hopper;
mod kayak;
mod priceline;
mod skyscanner;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::search::{normalize, SearchRequest, ValidationError};

/// Nominal age sent for child passengers where a site asks for ages.
pub(crate) const CHILD_AGE: u32 = 10;

/// Catalog identifier. Declaration order is catalog order, so a
/// `BTreeSet<SiteId>` iterates the way results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteId {
    GoogleFlights,
    Kayak,
    Momondo,
    Skyscanner,
    Expedia,
    Priceline,
    Hopper,
    Cheapoair,
}

impl SiteId {
    pub fn as_str(self) -> &'static str {
        match self {
            SiteId::GoogleFlights => "google_flights",
            SiteId::Kayak => "kayak",
            SiteId::Momondo => "momondo",
            SiteId::Skyscanner => "skyscanner",
            SiteId::Expedia => "expedia",
            SiteId::Priceline => "priceline",
            SiteId::Hopper => "hopper",
            SiteId::Cheapoair => "cheapoair",
        }
    }

    pub fn definition(self) -> &'static SiteDefinition {
        &CATALOG[self as usize]
    }

    pub fn display_name(self) -> &'static str {
        self.definition().display_name
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteId {
    type Err = BuildError;

    /// Accepts the id (`google_flights`) or the display name (`Google Flights`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        CATALOG
            .iter()
            .find(|def| {
                normalize(def.id.as_str()) == wanted || normalize(def.display_name) == wanted
            })
            .map(|def| def.id)
            .ok_or_else(|| BuildError::UnknownSite(s.to_string()))
    }
}

/// Builder signature: the parsed base URL in, the finished deep link out.
pub type UrlBuilder = fn(&SearchRequest, Url) -> Url;

/// One entry of the static site catalog.
pub struct SiteDefinition {
    pub id: SiteId,
    pub display_name: &'static str,
    pub base_url: &'static str,
    /// Caveat shown next to the link, if any.
    pub note: Option<&'static str>,
    pub builder: UrlBuilder,
}

impl fmt::Debug for SiteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteDefinition")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

static CATALOG: [SiteDefinition; 8] = [
    SiteDefinition {
        id: SiteId::GoogleFlights,
        display_name: "Google Flights",
        base_url: google::BASE_URL,
        note: None,
        builder: google::build,
    },
    SiteDefinition {
        id: SiteId::Kayak,
        display_name: "Kayak",
        base_url: kayak::KAYAK_BASE_URL,
        note: None,
        builder: kayak::build_kayak,
    },
    SiteDefinition {
        id: SiteId::Momondo,
        display_name: "Momondo",
        base_url: kayak::MOMONDO_BASE_URL,
        note: None,
        builder: kayak::build_momondo,
    },
    SiteDefinition {
        id: SiteId::Skyscanner,
        display_name: "Skyscanner",
        base_url: skyscanner::BASE_URL,
        note: None,
        builder: skyscanner::build,
    },
    SiteDefinition {
        id: SiteId::Expedia,
        display_name: "Expedia",
        base_url: expedia::BASE_URL,
        note: None,
        builder: expedia::build,
    },
    SiteDefinition {
        id: SiteId::Priceline,
        display_name: "Priceline",
        base_url: priceline::BASE_URL,
        note: None,
        builder: priceline::build,
    },
    SiteDefinition {
        id: SiteId::Hopper,
        display_name: "Hopper",
        base_url: hopper::BASE_URL,
        note: Some(hopper::NOTE),
        builder: hopper::build,
    },
    SiteDefinition {
        id: SiteId::Cheapoair,
        display_name: "CheapOair",
        base_url: cheapoair::BASE_URL,
        note: None,
        builder: cheapoair::build,
    },
];

/// The full catalog, in catalog order.
pub fn catalog() -> &'static [SiteDefinition] {
    &CATALOG
}

/// Every site.
pub fn all_sites() -> Vec<SiteId> {
    CATALOG.iter().map(|def| def.id).collect()
}

/// Sites pre-selected on a fresh search form.
pub fn default_sites() -> Vec<SiteId> {
    vec![
        SiteId::GoogleFlights,
        SiteId::Kayak,
        SiteId::Momondo,
        SiteId::Skyscanner,
        SiteId::Expedia,
        SiteId::Priceline,
    ]
}

/// The "Top 4" quick selection.
pub fn top_sites() -> Vec<SiteId> {
    vec![
        SiteId::GoogleFlights,
        SiteId::Kayak,
        SiteId::Momondo,
        SiteId::Skyscanner,
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("unknown site '{0}'")]
    UnknownSite(String),
    #[error("invalid search request: {}", join_errors(.0))]
    InvalidRequest(Vec<ValidationError>),
    #[error("bad base URL for {site}: {source}")]
    BaseUrl {
        site: SiteId,
        #[source]
        source: url::ParseError,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One generated deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedUrl {
    pub site: SiteId,
    pub url: String,
}

/// Deep links for every selected site, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedResult {
    pub entries: Vec<GeneratedUrl>,
}

impl GeneratedResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedUrl> {
        self.entries.iter()
    }

    pub fn get(&self, site: SiteId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.site == site)
            .map(|e| e.url.as_str())
    }
}

/// Build the deep link for `site_id` (id or display name).
pub fn build(request: &SearchRequest, site_id: &str) -> Result<String, BuildError> {
    let site: SiteId = site_id.parse()?;
    build_for(request, site)
}

/// Build the deep link for a catalog site.
pub fn build_for(request: &SearchRequest, site: SiteId) -> Result<String, BuildError> {
    request.check().map_err(BuildError::InvalidRequest)?;
    build_checked(request, site.definition())
}

/// Build links for every site in `request.selected_sites`, in catalog order.
pub fn generate(request: &SearchRequest) -> Result<GeneratedResult, BuildError> {
    request.check().map_err(BuildError::InvalidRequest)?;
    let entries = CATALOG
        .iter()
        .filter(|def| request.selected_sites.contains(&def.id))
        .map(|def| {
            build_checked(request, def).map(|url| GeneratedUrl { site: def.id, url })
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(
        route = %request.route_label(),
        sites = entries.len(),
        "generated deep links"
    );
    Ok(GeneratedResult { entries })
}

fn build_checked(request: &SearchRequest, def: &SiteDefinition) -> Result<String, BuildError> {
    let base = Url::parse(def.base_url).map_err(|source| BuildError::BaseUrl {
        site: def.id,
        source,
    })?;
    Ok(String::from((def.builder)(request, base)))
}

/// Append percent-encoded path segments, dropping a trailing empty segment
/// from the base first so `https://host/a/` + `["b"]` gives `/a/b`.
pub(crate) fn push_segments<I, S>(url: &mut Url, segments: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty();
        for segment in segments {
            path.push(segment.as_ref());
        }
    }
}

/// `YYYY-MM-DD`.
pub(crate) fn iso_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
