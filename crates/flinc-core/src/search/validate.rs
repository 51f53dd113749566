//! Form validation: raw user input in, `SearchRequest` or every failure out.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::types::{CabinClass, SearchRequest, TripType};
use crate::sites::SiteId;

/// Passenger bounds offered by the search form.
pub const ADULTS_RANGE: RangeInclusive<u32> = 1..=9;
pub const CHILDREN_RANGE: RangeInclusive<u32> = 0..=8;
pub const INFANTS_RANGE: RangeInclusive<u32> = 0..=4;

/// Unvalidated search form input.
#[derive(Debug, Clone)]
pub struct RawSearch {
    pub trip_type: TripType,
    pub origin: String,
    pub destination: String,
    pub depart_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub cabin: CabinClass,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    /// Site ids or display names, as typed.
    pub sites: Vec<String>,
}

impl Default for RawSearch {
    fn default() -> Self {
        Self {
            trip_type: TripType::RoundTrip,
            origin: String::new(),
            destination: String::new(),
            depart_date: None,
            return_date: None,
            cabin: CabinClass::Economy,
            adults: 1,
            children: 0,
            infants: 0,
            sites: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} airport code is required")]
    MissingAirport { field: &'static str },
    #[error("{field} airport code '{value}' must be exactly 3 letters (e.g. SFO, LAX, JFK)")]
    BadAirportCode { field: &'static str, value: String },
    #[error("origin and destination must be different")]
    SameOriginDestination,
    #[error("departure date is required")]
    MissingDepartDate,
    #[error("return date is required for round trips")]
    MissingReturnDate,
    #[error("return date {return_date} is before departure date {depart_date}")]
    ReturnBeforeDepart {
        depart_date: NaiveDate,
        return_date: NaiveDate,
    },
    #[error("one-way trips cannot carry a return date")]
    UnexpectedReturnDate,
    #[error("{field} must be between {min} and {max}, got {value}")]
    PassengerCount {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("select at least one site")]
    NoSitesSelected,
    #[error("unknown site '{0}'")]
    UnknownSite(String),
}

/// Validate raw form input. Collects every failure instead of stopping at the first.
pub fn validate(raw: &RawSearch) -> Result<SearchRequest, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let origin = normalize_code(&raw.origin);
    let destination = normalize_code(&raw.destination);
    check_code("origin", &origin, &mut errors);
    check_code("destination", &destination, &mut errors);
    if !origin.is_empty() && origin == destination {
        errors.push(ValidationError::SameOriginDestination);
    }

    let return_date = match raw.trip_type {
        TripType::RoundTrip => raw.return_date,
        TripType::OneWay => None,
    };
    check_dates(raw.trip_type, raw.depart_date, return_date, &mut errors);

    check_count("adults", raw.adults, &ADULTS_RANGE, &mut errors);
    check_count("children", raw.children, &CHILDREN_RANGE, &mut errors);
    check_count("infants", raw.infants, &INFANTS_RANGE, &mut errors);

    let mut selected_sites = BTreeSet::new();
    for name in &raw.sites {
        match name.parse::<SiteId>() {
            Ok(id) => {
                selected_sites.insert(id);
            }
            Err(_) => errors.push(ValidationError::UnknownSite(name.clone())),
        }
    }
    if raw.sites.is_empty() {
        errors.push(ValidationError::NoSitesSelected);
    }

    let Some(depart_date) = raw.depart_date else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SearchRequest {
        trip_type: raw.trip_type,
        origin,
        destination,
        depart_date,
        return_date,
        cabin: raw.cabin,
        adults: raw.adults,
        children: raw.children,
        infants: raw.infants,
        selected_sites,
    })
}

impl SearchRequest {
    /// Re-check the invariants `validate` establishes. Used as a guard by the
    /// site builders and after rehydrating a request from history.
    pub fn check(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field, code) in [("origin", &self.origin), ("destination", &self.destination)] {
            if normalize_code(code) != *code {
                errors.push(ValidationError::BadAirportCode {
                    field,
                    value: code.clone(),
                });
            } else {
                check_code(field, code, &mut errors);
            }
        }
        if self.origin == self.destination {
            errors.push(ValidationError::SameOriginDestination);
        }

        if self.trip_type == TripType::OneWay && self.return_date.is_some() {
            errors.push(ValidationError::UnexpectedReturnDate);
        }
        check_dates(
            self.trip_type,
            Some(self.depart_date),
            self.return_date,
            &mut errors,
        );

        check_count("adults", self.adults, &ADULTS_RANGE, &mut errors);
        check_count("children", self.children, &CHILDREN_RANGE, &mut errors);
        check_count("infants", self.infants, &INFANTS_RANGE, &mut errors);

        if self.selected_sites.is_empty() {
            errors.push(ValidationError::NoSitesSelected);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn check_code(field: &'static str, code: &str, errors: &mut Vec<ValidationError>) {
    if code.is_empty() {
        errors.push(ValidationError::MissingAirport { field });
    } else if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        errors.push(ValidationError::BadAirportCode {
            field,
            value: code.to_string(),
        });
    }
}

fn check_dates(
    trip_type: TripType,
    depart_date: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
    errors: &mut Vec<ValidationError>,
) {
    let Some(depart_date) = depart_date else {
        errors.push(ValidationError::MissingDepartDate);
        return;
    };
    if trip_type != TripType::RoundTrip {
        return;
    }
    match return_date {
        None => errors.push(ValidationError::MissingReturnDate),
        Some(return_date) if return_date < depart_date => {
            errors.push(ValidationError::ReturnBeforeDepart {
                depart_date,
                return_date,
            })
        }
        Some(_) => {}
    }
}

fn check_count(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
    errors: &mut Vec<ValidationError>,
) {
    if !range.contains(&value) {
        errors.push(ValidationError::PassengerCount {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
}
