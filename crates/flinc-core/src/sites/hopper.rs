//! Hopper is primarily a mobile app. The web shop accepts these parameters
//! but may not prefill every field, so this link is best-effort.

use url::Url;

use super::iso_date;
use crate::search::{CabinClass, SearchRequest};

pub const BASE_URL: &str = "https://www.hopper.com/flights/shop/";

pub const NOTE: &str =
    "Hopper is mainly a mobile app; the website may not prefill every search field.";

fn cabin_token(cabin: CabinClass) -> &'static str {
    match cabin {
        CabinClass::Economy => "economy",
        CabinClass::PremiumEconomy => "premium_economy",
        CabinClass::Business => "business",
        CabinClass::First => "first",
    }
}

pub fn build(req: &SearchRequest, mut url: Url) -> Url {
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("origin", &req.origin)
            .append_pair("destination", &req.destination)
            .append_pair("departureDate", &iso_date(req.depart_date));
        match req.return_leg() {
            Some(return_date) => {
                query
                    .append_pair("returnDate", &iso_date(return_date))
                    .append_pair("tripCategory", "round_trip");
            }
            None => {
                query.append_pair("tripCategory", "one_way");
            }
        }
        query
            .append_pair("adultsCount", &req.adults.to_string())
            .append_pair("childrenCount", &req.children.to_string())
            .append_pair("infantsOnLapCount", &req.infants.to_string())
            .append_pair("cabinClass", cabin_token(req.cabin));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::tests::{one_way, round_trip};

    #[test]
    fn round_trip_query() {
        let url = build(&round_trip(), Url::parse(BASE_URL).unwrap());
        assert_eq!(
            url.as_str(),
            "https://www.hopper.com/flights/shop/?origin=SFO&destination=JFK&departureDate=2025-06-01&returnDate=2025-06-10&tripCategory=round_trip&adultsCount=1&childrenCount=0&infantsOnLapCount=0&cabinClass=business"
        );
    }

    #[test]
    fn one_way_has_no_return_date() {
        let url = build(&one_way(), Url::parse(BASE_URL).unwrap());
        assert!(url.query_pairs().all(|(k, _)| k != "returnDate"));
        assert!(url.as_str().contains("tripCategory=one_way"));
    }
}
