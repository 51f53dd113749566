//! Priceline mobile search route: one `ORG-DST-date` segment per leg and the
//! passenger mix in a single `psc` (passenger configuration) parameter.

use url::Url;

use super::{iso_date, push_segments};
use crate::search::{CabinClass, SearchRequest};

pub const BASE_URL: &str = "https://www.priceline.com/m/fly/search";

fn cabin_token(cabin: CabinClass) -> &'static str {
    match cabin {
        CabinClass::Economy => "ECO",
        CabinClass::PremiumEconomy => "PEC",
        CabinClass::Business => "BUS",
        CabinClass::First => "FST",
    }
}

/// `<adults>A<children>C<infants>I`, e.g. `2A1C0I`.
fn passenger_config(req: &SearchRequest) -> String {
    format!("{}A{}C{}I", req.adults, req.children, req.infants)
}

pub fn build(req: &SearchRequest, mut url: Url) -> Url {
    let mut segments = vec![format!(
        "{}-{}-{}",
        req.origin,
        req.destination,
        iso_date(req.depart_date)
    )];
    if let Some(return_date) = req.return_leg() {
        segments.push(format!(
            "{}-{}-{}",
            req.destination,
            req.origin,
            iso_date(return_date)
        ));
    }
    segments.push(String::new());
    push_segments(&mut url, &segments);

    url.query_pairs_mut()
        .append_pair("cabin-class", cabin_token(req.cabin))
        .append_pair("psc", &passenger_config(req))
        .append_pair("no-date-search", "false");
    url
}
