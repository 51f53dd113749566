//! Command handlers against a temp history database and a fake launcher.

use crate::cli::commands::{
    run_clear, run_delete, run_history, run_open, run_preview, run_rerun, OpenOptions, RerunMode,
};
use chrono::NaiveDate;
use flinc_core::history_db::{HistoryDb, HistoryFilter};
use flinc_core::launcher::{Browser, IncognitoLauncher, LaunchError};
use flinc_core::preview::PreviewFormat;
use flinc_core::search::{CabinClass, RawSearch, TripType};
use std::cell::RefCell;
use std::time::Duration;

#[derive(Default)]
struct RecordingLauncher {
    urls: RefCell<Vec<String>>,
    fail_all: bool,
}

impl IncognitoLauncher for RecordingLauncher {
    fn open_incognito(&self, browser: Browser, url: &str) -> Result<(), LaunchError> {
        self.urls.borrow_mut().push(url.to_string());
        if self.fail_all {
            return Err(LaunchError::NotFound {
                browser,
                tried: "none".to_string(),
            });
        }
        Ok(())
    }
}

fn raw() -> RawSearch {
    RawSearch {
        trip_type: TripType::RoundTrip,
        origin: "sfo".to_string(),
        destination: "jfk".to_string(),
        depart_date: NaiveDate::from_ymd_opt(2025, 6, 1),
        return_date: NaiveDate::from_ymd_opt(2025, 6, 10),
        cabin: CabinClass::Business,
        adults: 1,
        children: 0,
        infants: 0,
        sites: vec!["kayak".to_string(), "google_flights".to_string()],
    }
}

fn opts(save_history: bool) -> OpenOptions {
    OpenOptions {
        browser: Browser::Chrome,
        delay: Duration::ZERO,
        save_history,
    }
}

async fn temp_db(dir: &tempfile::TempDir) -> HistoryDb {
    HistoryDb::open_at(dir.path().join("state").join("history.db"))
        .await
        .unwrap()
}

#[tokio::test]
async fn open_launches_in_catalog_order_and_records() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir).await;
    let launcher = RecordingLauncher::default();

    run_open(&raw(), &launcher, &opts(true), Some(&db)).await.unwrap();

    let urls = launcher.urls.borrow();
    assert_eq!(urls.len(), 2);
    assert!(urls[0].starts_with("https://www.google.com/travel/flights"));
    assert!(urls[1].starts_with("https://www.kayak.com/flights/SFO-JFK/"));

    let saved = db.list(&HistoryFilter::default()).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].request.origin, "SFO");
}

#[tokio::test]
async fn open_without_history_saves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir).await;
    let launcher = RecordingLauncher::default();
    run_open(&raw(), &launcher, &opts(false), Some(&db)).await.unwrap();
    assert_eq!(db.count().await.unwrap(), 0);

    run_open(&raw(), &launcher, &opts(true), None).await.unwrap();
    assert_eq!(launcher.urls.borrow().len(), 4);
}

#[tokio::test]
async fn invalid_search_launches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir).await;
    let launcher = RecordingLauncher::default();
    let mut bad = raw();
    bad.destination = "SFO".to_string();
    bad.return_date = NaiveDate::from_ymd_opt(2025, 5, 1);

    let err = run_open(&bad, &launcher, &opts(true), Some(&db)).await.unwrap_err();
    assert!(err.to_string().contains("2 problem(s)"), "{err}");
    assert!(launcher.urls.borrow().is_empty());
    assert_eq!(db.count().await.unwrap(), 0);
}

#[tokio::test]
async fn every_launch_failing_is_an_error_but_still_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir).await;
    let launcher = RecordingLauncher {
        fail_all: true,
        ..RecordingLauncher::default()
    };
    assert!(run_open(&raw(), &launcher, &opts(true), Some(&db)).await.is_err());
    assert_eq!(launcher.urls.borrow().len(), 2);
    assert_eq!(db.count().await.unwrap(), 1);
}

#[tokio::test]
async fn preview_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.md");
    run_preview(&raw(), PreviewFormat::Markdown, Some(&path)).await.unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("- [Google Flights](https://www.google.com/travel/flights"));
    assert!(written.contains("- [Kayak](https://www.kayak.com/flights/"));
}

#[tokio::test]
async fn rerun_opens_saved_search_and_records_again() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir).await;
    let first = RecordingLauncher::default();
    run_open(&raw(), &first, &opts(true), Some(&db)).await.unwrap();
    let id = db.list(&HistoryFilter::recent(1)).await.unwrap()[0].id;

    let again = RecordingLauncher::default();
    run_rerun(&db, id, RerunMode::Open(opts(true)), &again).await.unwrap();
    assert_eq!(*again.urls.borrow(), *first.urls.borrow());
    assert_eq!(db.count().await.unwrap(), 2);

    run_rerun(&db, id, RerunMode::Preview(PreviewFormat::Text), &again)
        .await
        .unwrap();
    assert_eq!(again.urls.borrow().len(), 2);

    assert!(run_rerun(&db, id + 100, RerunMode::Preview(PreviewFormat::Text), &again)
        .await
        .is_err());
}

#[tokio::test]
async fn delete_clear_and_history() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir).await;
    let launcher = RecordingLauncher::default();
    for _ in 0..3 {
        run_open(&raw(), &launcher, &opts(true), Some(&db)).await.unwrap();
    }
    run_history(&db, &HistoryFilter::default(), 5).await.unwrap();

    let id = db.list(&HistoryFilter::recent(1)).await.unwrap()[0].id;
    run_delete(&db, id).await.unwrap();
    assert!(run_delete(&db, id).await.is_err());
    assert_eq!(db.count().await.unwrap(), 2);

    run_clear(&db, false).await.unwrap();
    assert_eq!(db.count().await.unwrap(), 2);
    run_clear(&db, true).await.unwrap();
    assert_eq!(db.count().await.unwrap(), 0);

    run_history(&db, &HistoryFilter::default(), 5).await.unwrap();
}
