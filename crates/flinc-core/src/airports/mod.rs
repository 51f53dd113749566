//! Airport lookup over a compiled-in catalog of major airports.
//!
//! The catalog is immutable and shared freely; `search` backs the
//! `airports` command and `lookup` adds city names to route output.

mod data;

use serde::Serialize;

pub use data::AIRPORTS;

/// Default number of matches returned by `search`.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AirportRecord {
    /// IATA code, upper-case.
    pub code: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub name: &'static str,
}

impl AirportRecord {
    /// `"SFO – San Francisco, United States (San Francisco International)"`.
    pub fn label(&self) -> String {
        format!("{} – {}, {} ({})", self.code, self.city, self.country, self.name)
    }
}

/// Exact (case-insensitive) code lookup.
pub fn lookup(code: &str) -> Option<&'static AirportRecord> {
    let code = code.trim();
    AIRPORTS.iter().find(|a| a.code.eq_ignore_ascii_case(code))
}

/// Case-insensitive substring search over code, city, and airport name.
///
/// Ranking: exact code, code prefix, city prefix, city substring, name
/// substring. Ties keep catalog order. A blank query matches nothing.
pub fn search(query: &str, limit: usize) -> Vec<&'static AirportRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(u8, usize, &'static AirportRecord)> = AIRPORTS
        .iter()
        .enumerate()
        .filter_map(|(i, airport)| rank(airport, &needle).map(|r| (r, i, airport)))
        .collect();
    ranked.sort_by_key(|&(r, i, _)| (r, i));
    ranked.into_iter().take(limit).map(|(_, _, a)| a).collect()
}

fn rank(airport: &AirportRecord, needle: &str) -> Option<u8> {
    let code = airport.code.to_lowercase();
    let city = airport.city.to_lowercase();
    let name = airport.name.to_lowercase();
    if code == needle {
        Some(0)
    } else if code.starts_with(needle) {
        Some(1)
    } else if city.starts_with(needle) {
        Some(2)
    } else if city.contains(needle) {
        Some(3)
    } else if name.contains(needle) || code.contains(needle) {
        Some(4)
    } else {
        None
    }
}
