//! Render generated deep links for review without opening a browser.

use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::search::{normalize, ParseEnumError, SearchRequest};
use crate::sites::{GeneratedResult, SiteId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PreviewFormat {
    /// Standalone HTML page with a parameter summary and one link per site.
    Html,
    /// `Site:\nurl` blocks separated by blank lines.
    #[default]
    Text,
    /// `- [Site](url)` list.
    Markdown,
    /// Request plus links as pretty-printed JSON.
    Json,
}

impl FromStr for PreviewFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "html" | "htm" => Ok(PreviewFormat::Html),
            "text" | "txt" | "plain" => Ok(PreviewFormat::Text),
            "markdown" | "md" => Ok(PreviewFormat::Markdown),
            "json" => Ok(PreviewFormat::Json),
            _ => Err(ParseEnumError {
                kind: "preview format",
                value: s.to_string(),
                expected: "html, text, markdown, json",
            }),
        }
    }
}

pub fn render(request: &SearchRequest, result: &GeneratedResult, format: PreviewFormat) -> String {
    match format {
        PreviewFormat::Html => render_html(request, result),
        PreviewFormat::Text => render_text(result),
        PreviewFormat::Markdown => render_markdown(request, result),
        PreviewFormat::Json => render_json(request, result),
    }
}

/// One-line summary: `SFO → JFK · Round Trip · 2025-06-01 – 2025-06-10 · Business · 2 passengers`.
pub fn summary(request: &SearchRequest) -> String {
    let dates = match request.return_leg() {
        Some(ret) => format!("{} – {}", request.depart_date, ret),
        None => request.depart_date.to_string(),
    };
    let n = request.total_passengers();
    format!(
        "{} · {} · {} · {} · {} passenger{}",
        request.route_label(),
        request.trip_type,
        dates,
        request.cabin,
        n,
        if n == 1 { "" } else { "s" }
    )
}

fn render_text(result: &GeneratedResult) -> String {
    result
        .iter()
        .map(|e| format!("{}:\n{}", e.site.display_name(), e.url))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_markdown(request: &SearchRequest, result: &GeneratedResult) -> String {
    let mut out = format!("### {}\n\n", summary(request));
    for entry in result.iter() {
        let _ = write!(out, "- [{}]({})", entry.site.display_name(), entry.url);
        if let Some(note) = note_for(entry.site) {
            let _ = write!(out, " _({note})_");
        }
        out.push('\n');
    }
    out
}

fn render_html(request: &SearchRequest, result: &GeneratedResult) -> String {
    let title = format!("Flights {}", request.route_label());
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&title));
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(&title));

    let _ = writeln!(out, "<dl>");
    let rows = [
        ("Trip", request.trip_type.to_string()),
        ("Depart", request.depart_date.to_string()),
        (
            "Return",
            request
                .return_leg()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Cabin", request.cabin.to_string()),
        (
            "Passengers",
            format!(
                "{} adult(s), {} child(ren), {} infant(s)",
                request.adults, request.children, request.infants
            ),
        ),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "<dt>{label}</dt><dd>{}</dd>", escape_html(&value));
    }
    let _ = writeln!(out, "</dl>");

    let _ = writeln!(out, "<ul>");
    for entry in result.iter() {
        let _ = write!(
            out,
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(&entry.url),
            escape_html(entry.site.display_name())
        );
        if let Some(note) = note_for(entry.site) {
            let _ = write!(out, " <small>{}</small>", escape_html(note));
        }
        let _ = writeln!(out, "</li>");
    }
    let _ = writeln!(out, "</ul>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn render_json(request: &SearchRequest, result: &GeneratedResult) -> String {
    let links: Vec<serde_json::Value> = result
        .iter()
        .map(|e| {
            serde_json::json!({
                "site": e.site,
                "name": e.site.display_name(),
                "url": e.url,
                "note": note_for(e.site),
            })
        })
        .collect();
    let doc = serde_json::json!({ "request": request, "links": links });
    format!("{doc:#}")
}

fn note_for(site: SiteId) -> Option<&'static str> {
    site.definition().note
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
