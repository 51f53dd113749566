//! Persistent search history (SQLite via sqlx).
//!
//! One row per submitted search. Rows rehydrate into `SearchRequest`s so a
//! past search can be run again; `buckets` groups listings by age.

pub mod buckets;
pub mod db;
mod searches;
pub mod types;

pub use buckets::*;
pub use db::*;
pub use types::*;

#[cfg(test)]
mod tests;
