//! Write operations: save, delete, clear.

use anyhow::Result;

use super::super::db::{unix_timestamp, HistoryDb};
use super::super::types::HistoryId;
use crate::search::SearchRequest;

impl HistoryDb {
    /// Record a submitted search. Returns the new row id.
    pub async fn save(&self, request: &SearchRequest) -> Result<HistoryId> {
        self.save_at(request, unix_timestamp()).await
    }

    /// Record a search with an explicit Unix-seconds timestamp.
    pub async fn save_at(&self, request: &SearchRequest, created_at: i64) -> Result<HistoryId> {
        let sites = request
            .selected_sites
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let return_date = request
            .return_leg()
            .map(|d| d.format("%Y-%m-%d").to_string());

        let row_id = sqlx::query(
            r#"
            INSERT INTO search_history (
                origin, destination, depart_date, return_date, trip_type,
                cabin, adults, children, infants, sites, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(&request.origin)
        .bind(&request.destination)
        .bind(request.depart_date.format("%Y-%m-%d").to_string())
        .bind(return_date)
        .bind(request.trip_type.as_str())
        .bind(request.cabin.as_str())
        .bind(i64::from(request.adults))
        .bind(i64::from(request.children))
        .bind(i64::from(request.infants))
        .bind(sites)
        .bind(created_at)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::debug!(id = row_id, route = %request.route_label(), "search saved");
        Ok(row_id)
    }

    /// Delete one search. Returns whether a row was removed.
    pub async fn delete(&self, id: HistoryId) -> Result<bool> {
        let r = sqlx::query("DELETE FROM search_history WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(r.rows_affected() > 0)
    }

    /// Delete every search. Returns the number of rows removed.
    pub async fn clear(&self) -> Result<u64> {
        let r = sqlx::query("DELETE FROM search_history")
            .execute(&self.pool)
            .await?;
        Ok(r.rows_affected())
    }
}
