pub mod config;
pub mod logging;

pub mod airports;
pub mod history_db;
pub mod launcher;
pub mod preview;
pub mod search;
pub mod sites;
