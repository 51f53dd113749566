//! Skyscanner: compact `YYMMDD` dates in the path, passengers through the
//! v2 parameters (`adultsv2`, `childrenv2`), currency pinned to USD.

use url::Url;

use super::push_segments;
use crate::search::{CabinClass, SearchRequest};

pub const BASE_URL: &str = "https://www.skyscanner.com/transport/flights";

fn compact_date(date: chrono::NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

fn cabin_token(cabin: CabinClass) -> &'static str {
    match cabin {
        CabinClass::Economy => "economy",
        CabinClass::PremiumEconomy => "premiumeconomy",
        CabinClass::Business => "business",
        CabinClass::First => "first",
    }
}

pub fn build(req: &SearchRequest, mut url: Url) -> Url {
    let mut segments = vec![
        req.origin.clone(),
        req.destination.clone(),
        compact_date(req.depart_date),
    ];
    if let Some(return_date) = req.return_leg() {
        segments.push(compact_date(return_date));
    }
    // Trailing slash.
    segments.push(String::new());
    push_segments(&mut url, &segments);

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("adultsv2", &req.adults.to_string());
        if req.children > 0 {
            query.append_pair("childrenv2", &req.children.to_string());
        }
        if req.infants > 0 {
            query.append_pair("infants", &req.infants.to_string());
        }
        query
            .append_pair("cabinclass", cabin_token(req.cabin))
            .append_pair("rtn", if req.return_leg().is_some() { "1" } else { "0" })
            .append_pair("currency", "USD")
            .append_pair("locale", "en-US")
            .append_pair("market", "US");
    }
    url
}
