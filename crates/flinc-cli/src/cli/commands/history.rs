//! `flinc history` – saved searches grouped by day, totals, popular routes.

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use flinc_core::history_db::{bucket_counts, group_by_bucket, HistoryDb, HistoryEntry, HistoryFilter};

pub async fn run_history(db: &HistoryDb, filter: &HistoryFilter, popular: u32) -> Result<()> {
    let entries = db.list(filter).await?;
    if entries.is_empty() {
        println!("No saved searches.");
        return Ok(());
    }

    let now = Local::now();
    let groups = group_by_bucket(&entries, &now);
    for (bucket, items) in &groups {
        println!("{bucket} ({})", items.len());
        for entry in items {
            println!("  {}", format_entry(entry, &now));
        }
        println!();
    }

    let total = db.count().await?;
    let counts: Vec<String> = bucket_counts(&groups)
        .into_iter()
        .map(|(bucket, n)| format!("{}: {n}", bucket.to_string().to_lowercase()))
        .collect();
    println!("{total} saved search(es); shown: {}", counts.join(", "));

    if popular > 0 {
        let routes = db.popular_routes(popular).await?;
        if !routes.is_empty() {
            println!();
            println!("Popular routes");
            for r in routes {
                println!("  {} → {}  ×{}", r.origin, r.destination, r.search_count);
            }
        }
    }
    Ok(())
}

/// `#12   14:05  SFO → JFK  2025-06-01 – 2025-06-10  Business  2 pax  [kayak, google_flights]`
fn format_entry<Tz: TimeZone>(entry: &HistoryEntry, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let req = &entry.request;
    let when = entry.created_at_utc().with_timezone(&now.timezone());
    let time = if when.date_naive() == now.date_naive() {
        when.format("%H:%M").to_string()
    } else {
        when.format("%Y-%m-%d").to_string()
    };
    let dates = match req.return_leg() {
        Some(ret) => format!("{} – {}", req.depart_date, ret),
        None => format!("{} (one way)", req.depart_date),
    };
    let sites: Vec<&str> = req.selected_sites.iter().map(|s| s.as_str()).collect();
    format!(
        "#{:<4} {:<10} {}  {}  {}  {} pax  [{}]",
        entry.id,
        time,
        req.route_label(),
        dates,
        req.cabin,
        req.total_passengers(),
        sites.join(", ")
    )
}
