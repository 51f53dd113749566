//! Read operations: list, get, count, popular routes.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::collections::BTreeSet;

use super::super::db::HistoryDb;
use super::super::types::{HistoryEntry, HistoryFilter, HistoryId, RouteCount};
use crate::search::{CabinClass, SearchRequest, TripType};
use crate::sites::SiteId;

const SELECT_COLUMNS: &str = r#"
    SELECT id, origin, destination, depart_date, return_date, trip_type,
           cabin, adults, children, infants, sites, created_at
    FROM search_history
"#;

impl HistoryDb {
    /// List stored searches, newest first. Rows that no longer decode are
    /// skipped with a warning.
    pub async fn list(&self, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>> {
        let sql = format!(
            "{SELECT_COLUMNS}
            WHERE (?1 IS NULL OR origin = ?1)
              AND (?2 IS NULL OR destination = ?2)
            ORDER BY created_at DESC, id DESC
            LIMIT ?3"
        );
        // SQLite treats a negative LIMIT as "no limit".
        let limit = filter.limit.map(i64::from).unwrap_or(-1);
        let rows = sqlx::query(&sql)
            .bind(filter.origin.as_deref().map(str::to_ascii_uppercase))
            .bind(filter.destination.as_deref().map(str::to_ascii_uppercase))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            match decode_entry(&row) {
                Ok(entry) => out.push(entry),
                Err(e) => {
                    let id: i64 = row.get("id");
                    tracing::warn!(id, "skipping unreadable history row: {:#}", e);
                }
            }
        }
        Ok(out)
    }

    /// Fetch one stored search.
    pub async fn get(&self, id: HistoryId) -> Result<Option<HistoryEntry>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        decode_entry(&row)
            .with_context(|| format!("history row {id}"))
            .map(Some)
    }

    /// Total number of stored searches.
    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM search_history")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }

    /// Most searched routes: count descending, then most recent first.
    pub async fn popular_routes(&self, limit: u32) -> Result<Vec<RouteCount>> {
        let rows = sqlx::query(
            r#"
            SELECT origin, destination,
                   COUNT(*) AS search_count,
                   MAX(created_at) AS last_searched
            FROM search_history
            GROUP BY origin, destination
            ORDER BY search_count DESC, last_searched DESC
            LIMIT ?1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| RouteCount {
                origin: row.get("origin"),
                destination: row.get("destination"),
                search_count: row.get("search_count"),
                last_searched: row.get("last_searched"),
            })
            .collect())
    }
}

fn decode_entry(row: &SqliteRow) -> Result<HistoryEntry> {
    let id: i64 = row.get("id");
    let origin: String = row.get("origin");
    let destination: String = row.get("destination");
    let depart_date: String = row.get("depart_date");
    let return_date: Option<String> = row.get("return_date");
    let trip_type: String = row.get("trip_type");
    let cabin: String = row.get("cabin");
    let adults: i64 = row.get("adults");
    let children: i64 = row.get("children");
    let infants: i64 = row.get("infants");
    let sites: String = row.get("sites");
    let created_at: i64 = row.get("created_at");

    let trip_type: TripType = trip_type.parse()?;
    let return_date = match trip_type {
        TripType::RoundTrip => return_date.as_deref().map(parse_date).transpose()?,
        TripType::OneWay => None,
    };

    let mut selected_sites = BTreeSet::new();
    for name in sites.split(',').filter(|s| !s.is_empty()) {
        match name.parse::<SiteId>() {
            Ok(site) => {
                selected_sites.insert(site);
            }
            Err(_) => tracing::debug!(id, site = name, "dropping unknown site from history row"),
        }
    }

    Ok(HistoryEntry {
        id,
        request: SearchRequest {
            trip_type,
            origin,
            destination,
            depart_date: parse_date(&depart_date)?,
            return_date,
            cabin: cabin.parse::<CabinClass>()?,
            adults: count(adults, "adults")?,
            children: count(children, "children")?,
            infants: count(infants, "infants")?,
            selected_sites,
        },
        created_at,
    })
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("bad date '{s}'"))
}

fn count(value: i64, field: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| anyhow!("bad {field} count {value}"))
}
