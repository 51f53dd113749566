//! `flinc airports <query>` – airport lookup.

use flinc_core::airports;

pub fn run_airports(query: &str, limit: usize) {
    let hits = airports::search(query, limit);
    if hits.is_empty() {
        println!("No airports match '{query}'.");
        return;
    }
    for a in hits {
        println!("{}", a.label());
    }
}
