//! CheapOair listing page: everything in the query string, passenger types
//! as separate counts, cabin as a numeric class code.

use url::Url;

use super::{iso_date, CHILD_AGE};
use crate::search::{CabinClass, SearchRequest};

pub const BASE_URL: &str = "https://www.cheapoair.com/air/listing";

fn cabin_code(cabin: CabinClass) -> &'static str {
    match cabin {
        CabinClass::Economy => "1",
        CabinClass::PremiumEconomy => "2",
        CabinClass::Business => "3",
        CabinClass::First => "4",
    }
}

pub fn build(req: &SearchRequest, mut url: Url) -> Url {
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("from", &req.origin)
            .append_pair("to", &req.destination)
            .append_pair("fromDt", &iso_date(req.depart_date));
        match req.return_leg() {
            Some(return_date) => {
                query
                    .append_pair("toDt", &iso_date(return_date))
                    .append_pair("rt", "true");
            }
            None => {
                query.append_pair("rt", "false");
            }
        }
        query
            .append_pair("ad", &req.adults.to_string())
            .append_pair("ch", &req.children.to_string())
            .append_pair("infl", &req.infants.to_string())
            .append_pair("class", cabin_code(req.cabin));
        for i in 0..req.children {
            query.append_pair("childAge", &format!("c{i}-{CHILD_AGE}"));
        }
        query.append_pair("lang", "en-US");
    }
    url
}
