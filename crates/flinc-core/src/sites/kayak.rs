//! Kayak and Momondo share a backend and therefore one path grammar:
//! `/ORG-DST/depart[/return]/cabin/Nadults[/children-…]`.

use url::Url;

use super::{iso_date, push_segments, CHILD_AGE};
use crate::search::{CabinClass, SearchRequest};

pub const KAYAK_BASE_URL: &str = "https://www.kayak.com/flights";
pub const MOMONDO_BASE_URL: &str = "https://www.momondo.com/flight-search";

pub fn build_kayak(req: &SearchRequest, url: Url) -> Url {
    build_path_style(req, url)
}

pub fn build_momondo(req: &SearchRequest, url: Url) -> Url {
    build_path_style(req, url)
}

fn cabin_token(cabin: CabinClass) -> &'static str {
    match cabin {
        CabinClass::Economy => "economy",
        CabinClass::PremiumEconomy => "premium",
        CabinClass::Business => "business",
        CabinClass::First => "first",
    }
}

fn build_path_style(req: &SearchRequest, mut url: Url) -> Url {
    let mut segments = vec![
        format!("{}-{}", req.origin, req.destination),
        iso_date(req.depart_date),
    ];
    if let Some(return_date) = req.return_leg() {
        segments.push(iso_date(return_date));
    }
    segments.push(cabin_token(req.cabin).to_string());
    segments.push(format!("{}adults", req.adults));

    // Children by age; lap infants as `1L`.
    if req.children + req.infants > 0 {
        let ages = std::iter::repeat(CHILD_AGE.to_string())
            .take(req.children as usize)
            .chain(std::iter::repeat("1L".to_string()).take(req.infants as usize))
            .collect::<Vec<_>>();
        segments.push(format!("children-{}", ages.join("-")));
    }

    push_segments(&mut url, &segments);
    url.query_pairs_mut().append_pair("sort", "bestflight_a");
    url
}
