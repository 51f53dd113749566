//! Tests for history_db (use in-memory DB helper from db).

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::history_db::db::open_memory;
use crate::history_db::HistoryFilter;
use crate::search::{CabinClass, SearchRequest, TripType};
use crate::sites::SiteId;

fn request(origin: &str, destination: &str) -> SearchRequest {
    SearchRequest {
        trip_type: TripType::RoundTrip,
        origin: origin.to_string(),
        destination: destination.to_string(),
        depart_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2025, 6, 10),
        cabin: CabinClass::PremiumEconomy,
        adults: 2,
        children: 1,
        infants: 0,
        selected_sites: BTreeSet::from([SiteId::Skyscanner, SiteId::GoogleFlights]),
    }
}

#[tokio::test]
async fn save_and_get_roundtrip() {
    let db = open_memory().await.unwrap();
    let req = request("SFO", "JFK");
    let id = db.save_at(&req, 1_700_000_000).await.unwrap();

    let entry = db.get(id).await.unwrap().expect("entry exists");
    assert_eq!(entry.id, id);
    assert_eq!(entry.request, req);
    assert_eq!(entry.created_at, 1_700_000_000);
    assert!(entry.request.check().is_ok());

    assert!(db.get(id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn one_way_stores_no_return_date() {
    let db = open_memory().await.unwrap();
    let mut req = request("SFO", "JFK");
    req.trip_type = TripType::OneWay;
    req.return_date = None;
    let id = db.save(&req).await.unwrap();
    let entry = db.get(id).await.unwrap().unwrap();
    assert_eq!(entry.request.trip_type, TripType::OneWay);
    assert_eq!(entry.request.return_date, None);
}

#[tokio::test]
async fn list_newest_first_with_filters() {
    let db = open_memory().await.unwrap();
    assert!(db.list(&HistoryFilter::default()).await.unwrap().is_empty());

    let a = db.save_at(&request("SFO", "JFK"), 100).await.unwrap();
    let b = db.save_at(&request("LAX", "JFK"), 200).await.unwrap();
    let c = db.save_at(&request("SFO", "ORD"), 300).await.unwrap();
    // Same timestamp: higher id wins.
    let d = db.save_at(&request("SFO", "JFK"), 300).await.unwrap();

    let all: Vec<i64> = db
        .list(&HistoryFilter::default())
        .await
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(all, vec![d, c, b, a]);

    let recent = db.list(&HistoryFilter::recent(2)).await.unwrap();
    assert_eq!(recent.len(), 2);

    let from_sfo = db
        .list(&HistoryFilter {
            origin: Some("sfo".to_string()),
            ..HistoryFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(
        from_sfo.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![d, c, a]
    );

    let route = db
        .list(&HistoryFilter {
            origin: Some("SFO".to_string()),
            destination: Some("JFK".to_string()),
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(route.iter().map(|e| e.id).collect::<Vec<_>>(), vec![d, a]);
}

#[tokio::test]
async fn delete_and_clear() {
    let db = open_memory().await.unwrap();
    let a = db.save(&request("SFO", "JFK")).await.unwrap();
    let _b = db.save(&request("LAX", "JFK")).await.unwrap();
    let _c = db.save(&request("SEA", "JFK")).await.unwrap();
    assert_eq!(db.count().await.unwrap(), 3);

    assert!(db.delete(a).await.unwrap());
    assert!(!db.delete(a).await.unwrap());
    assert_eq!(db.count().await.unwrap(), 2);

    assert_eq!(db.clear().await.unwrap(), 2);
    assert_eq!(db.count().await.unwrap(), 0);
    assert_eq!(db.clear().await.unwrap(), 0);
}

#[tokio::test]
async fn popular_routes_by_count_then_recency() {
    let db = open_memory().await.unwrap();
    db.save_at(&request("SFO", "JFK"), 10).await.unwrap();
    db.save_at(&request("SFO", "JFK"), 20).await.unwrap();
    db.save_at(&request("LAX", "ORD"), 30).await.unwrap();
    db.save_at(&request("SEA", "BOS"), 40).await.unwrap();

    let routes = db.popular_routes(3).await.unwrap();
    assert_eq!(routes.len(), 3);
    assert_eq!(
        (routes[0].origin.as_str(), routes[0].destination.as_str()),
        ("SFO", "JFK")
    );
    assert_eq!(routes[0].search_count, 2);
    assert_eq!(routes[0].last_searched, 20);
    // Tie on count: most recent first.
    assert_eq!(routes[1].origin, "SEA");
    assert_eq!(routes[2].origin, "LAX");

    assert_eq!(db.popular_routes(1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn unreadable_rows_are_skipped_by_list() {
    let db = open_memory().await.unwrap();
    let good = db.save(&request("SFO", "JFK")).await.unwrap();
    sqlx::query(
        "INSERT INTO search_history (origin, destination, depart_date, trip_type, created_at)
         VALUES ('SFO', 'JFK', 'not-a-date', 'one-way', 0)",
    )
    .execute(&db.pool)
    .await
    .unwrap();

    let entries = db.list(&HistoryFilter::default()).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, good);
}

#[tokio::test]
async fn unknown_sites_are_dropped_on_read() {
    let db = open_memory().await.unwrap();
    let id = db.save(&request("SFO", "JFK")).await.unwrap();
    sqlx::query("UPDATE search_history SET sites = 'kayak,orbitz' WHERE id = ?1")
        .bind(id)
        .execute(&db.pool)
        .await
        .unwrap();
    let entry = db.get(id).await.unwrap().unwrap();
    assert_eq!(entry.request.selected_sites, BTreeSet::from([SiteId::Kayak]));
}
