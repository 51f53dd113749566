//! Expedia `/go/flight/search` deep link.
//!
//! Both path dates are required by the route; one-way searches repeat the
//! departure date. Each child contributes one `childAge` parameter.

use url::Url;

use super::{iso_date, push_segments, CHILD_AGE};
use crate::search::{CabinClass, SearchRequest};

pub const BASE_URL: &str = "https://www.expedia.com/go/flight/search";

/// Expedia's time-of-day code for "any time".
const ANY_TIME: &str = "362";

fn cabin_token(cabin: CabinClass) -> &'static str {
    match cabin {
        CabinClass::Economy => "economy",
        CabinClass::PremiumEconomy => "premium",
        CabinClass::Business => "business",
        CabinClass::First => "first",
    }
}

pub fn build(req: &SearchRequest, mut url: Url) -> Url {
    let depart = iso_date(req.depart_date);
    let return_leg = req.return_leg().map(iso_date);
    match &return_leg {
        Some(return_date) => push_segments(
            &mut url,
            ["Roundtrip", depart.as_str(), return_date.as_str()],
        ),
        None => push_segments(&mut url, ["Oneway", depart.as_str(), depart.as_str()]),
    }

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("load", "1")
            .append_pair("FromAirport", &req.origin)
            .append_pair("ToAirport", &req.destination)
            .append_pair("FromTime", ANY_TIME);
        if return_leg.is_some() {
            query.append_pair("ToTime", ANY_TIME);
        }
        query.append_pair("adults", &req.adults.to_string());
        for _ in 0..req.children {
            query.append_pair("childAge", &CHILD_AGE.to_string());
        }
        if req.infants > 0 {
            query.append_pair("infantsInLap", &req.infants.to_string());
        }
        query.append_pair("cabinClass", cabin_token(req.cabin));
    }
    url
}
