//! Types shared by validation, the site builders, and the history store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::sites::SiteId;

/// Error for a user-supplied enum value that matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    OneWay,
    RoundTrip,
}

impl TripType {
    pub fn as_str(self) -> &'static str {
        match self {
            TripType::OneWay => "one-way",
            TripType::RoundTrip => "round-trip",
        }
    }

    pub fn is_round_trip(self) -> bool {
        self == TripType::RoundTrip
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TripType::OneWay => "One Way",
            TripType::RoundTrip => "Round Trip",
        })
    }
}

impl FromStr for TripType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "one-way" | "oneway" => Ok(TripType::OneWay),
            "round-trip" | "roundtrip" | "return" => Ok(TripType::RoundTrip),
            _ => Err(ParseEnumError {
                kind: "trip type",
                value: s.to_string(),
                expected: "one-way, round-trip",
            }),
        }
    }
}

/// Fare tier. Each site encodes it with its own token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::Economy,
        CabinClass::PremiumEconomy,
        CabinClass::Business,
        CabinClass::First,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium-economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        })
    }
}

impl FromStr for CabinClass {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "economy" | "coach" => Ok(CabinClass::Economy),
            "premium-economy" | "premium" => Ok(CabinClass::PremiumEconomy),
            "business" => Ok(CabinClass::Business),
            "first" => Ok(CabinClass::First),
            _ => Err(ParseEnumError {
                kind: "cabin class",
                value: s.to_string(),
                expected: "economy, premium-economy, business, first",
            }),
        }
    }
}

/// Lower-case, trim, and fold spaces/underscores to `-` so "Premium Economy",
/// "premium_economy" and "premium-economy" compare equal.
pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// A validated flight search. Built by [`validate`](super::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub trip_type: TripType,
    pub origin: String,
    pub destination: String,
    pub depart_date: NaiveDate,
    /// Present iff `trip_type` is `RoundTrip`.
    pub return_date: Option<NaiveDate>,
    pub cabin: CabinClass,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub selected_sites: BTreeSet<SiteId>,
}

impl SearchRequest {
    pub fn total_passengers(&self) -> u32 {
        self.adults + self.children + self.infants
    }

    /// Return date to encode, or `None` for one-way trips.
    pub fn return_leg(&self) -> Option<NaiveDate> {
        match self.trip_type {
            TripType::RoundTrip => self.return_date,
            TripType::OneWay => None,
        }
    }

    /// `"SFO → JFK"` style label for listings.
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}
