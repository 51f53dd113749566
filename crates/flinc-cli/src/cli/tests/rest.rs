//! Tests for history, rerun, delete, clear, airports, sites, completions.

use super::{parse, parse_err};
use crate::cli::CliCommand;
use clap_complete::Shell;
use flinc_core::launcher::Browser;
use flinc_core::preview::PreviewFormat;

#[test]
fn cli_parse_history_defaults() {
    match parse(&["flinc", "history"]) {
        CliCommand::History {
            limit,
            origin,
            destination,
            popular,
        } => {
            assert_eq!(limit, 50);
            assert!(origin.is_none());
            assert!(destination.is_none());
            assert_eq!(popular, 5);
        }
        _ => panic!("expected History"),
    }
}

#[test]
fn cli_parse_history_filters() {
    match parse(&["flinc", "history", "-n", "5", "--origin", "sfo", "--popular", "0"]) {
        CliCommand::History {
            limit,
            origin,
            popular,
            ..
        } => {
            assert_eq!(limit, 5);
            assert_eq!(origin.as_deref(), Some("sfo"));
            assert_eq!(popular, 0);
        }
        _ => panic!("expected History"),
    }
}

#[test]
fn cli_parse_rerun() {
    match parse(&["flinc", "rerun", "7", "--browser", "brave"]) {
        CliCommand::Rerun {
            id,
            preview,
            browser,
            no_history,
            ..
        } => {
            assert_eq!(id, 7);
            assert!(!preview);
            assert_eq!(browser, Some(Browser::Brave));
            assert!(!no_history);
        }
        _ => panic!("expected Rerun"),
    }
}

#[test]
fn cli_parse_rerun_preview() {
    match parse(&["flinc", "rerun", "7", "--preview", "-f", "markdown"]) {
        CliCommand::Rerun {
            preview, format, ..
        } => {
            assert!(preview);
            assert_eq!(format, PreviewFormat::Markdown);
        }
        _ => panic!("expected Rerun"),
    }
    parse_err(&["flinc", "rerun", "7", "--preview", "--browser", "chrome"]);
}

#[test]
fn cli_parse_delete() {
    match parse(&["flinc", "delete", "42"]) {
        CliCommand::Delete { id } => assert_eq!(id, 42),
        _ => panic!("expected Delete"),
    }
    parse_err(&["flinc", "delete", "latest"]);
}

#[test]
fn cli_parse_clear() {
    match parse(&["flinc", "clear"]) {
        CliCommand::Clear { yes } => assert!(!yes),
        _ => panic!("expected Clear"),
    }
    match parse(&["flinc", "clear", "--yes"]) {
        CliCommand::Clear { yes } => assert!(yes),
        _ => panic!("expected Clear"),
    }
}

#[test]
fn cli_parse_airports() {
    match parse(&["flinc", "airports", "new york", "-n", "3"]) {
        CliCommand::Airports { query, limit } => {
            assert_eq!(query, "new york");
            assert_eq!(limit, 3);
        }
        _ => panic!("expected Airports"),
    }
}

#[test]
fn cli_parse_sites() {
    match parse(&["flinc", "sites"]) {
        CliCommand::Sites => {}
        _ => panic!("expected Sites"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["flinc", "completions", "zsh"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Zsh),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
