//! Google Flights: natural-language `q=` query.
//!
//! The structured `tfs=` parameter is an opaque protobuf, so the search is
//! phrased as text. Passengers are a single total; cabin is a coarse word.

use url::Url;

use super::iso_date;
use crate::search::{CabinClass, SearchRequest};

pub const BASE_URL: &str = "https://www.google.com/travel/flights";

pub fn build(req: &SearchRequest, mut url: Url) -> Url {
    let mut query = format!(
        "Flights from {} to {} on {}",
        req.origin,
        req.destination,
        iso_date(req.depart_date)
    );
    match req.return_leg() {
        Some(return_date) => {
            query.push_str(" through ");
            query.push_str(&iso_date(return_date));
        }
        None => query.push_str(" one way"),
    }

    let cabin = match req.cabin {
        CabinClass::Economy => "economy",
        CabinClass::PremiumEconomy => "premium economy",
        CabinClass::Business => "business",
        CabinClass::First => "first",
    };
    let total = req.total_passengers();
    let noun = if total == 1 { "passenger" } else { "passengers" };
    query.push_str(&format!(" in {cabin} class for {total} {noun}"));

    url.query_pairs_mut()
        .append_pair("q", &query)
        .append_pair("hl", "en")
        .append_pair("curr", "USD");
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::tests::{one_way, round_trip};

    fn q(url: &Url) -> String {
        url.query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn round_trip_query_text() {
        let url = build(&round_trip(), Url::parse(BASE_URL).unwrap());
        assert_eq!(
            q(&url),
            "Flights from SFO to JFK on 2025-06-01 through 2025-06-10 in business class for 1 passenger"
        );
    }

    #[test]
    fn one_way_has_no_return_and_totals_passengers() {
        let mut req = one_way();
        req.adults = 2;
        req.children = 1;
        req.infants = 1;
        let url = build(&req, Url::parse(BASE_URL).unwrap());
        let text = q(&url);
        assert!(text.ends_with("one way in economy class for 4 passengers"), "{text}");
        assert!(!text.contains("through"));
    }
}
