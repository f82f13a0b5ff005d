//! Leaderboard table extraction.
//!
//! Pure and synchronous: HTML string in, dataset out. Failures collapse
//! into an empty [`LeaderboardTable`] rather than errors, and the tracing
//! events here are an observability side-channel only.

use crate::dom::{self, Document, Selection};
use crate::header::{self, HeaderChoice};
use crate::patterns::{CELL_SELECTOR, NEXT_DATA_SELECTOR, ROLE_TABLE_SELECTOR};
use crate::result::LeaderboardTable;
use crate::rows;

/// Extract the leaderboard dataset from an HTML document.
///
/// Locates the first `<table>` in document order, selects a header row,
/// then collects every body row that still holds content after
/// normalization. The returned table is empty when the document has no
/// table or the table yields no usable header.
pub(crate) fn extract_table(html: &str) -> LeaderboardTable {
    tracing::info!("parsing leaderboard HTML ({} bytes)", html.len());

    let doc = dom::parse(html);
    log_document_shape(&doc);

    let Some(table) = dom::first_match_in(&doc, "table") else {
        tracing::error!("no table found in HTML content");
        return LeaderboardTable::default();
    };

    let head_rows = header_candidates(&table);
    let body_rows = body_candidates(&table);

    let mut consumed = None;
    let mut result = LeaderboardTable::default();
    match header::choose(&head_rows, &body_rows) {
        HeaderChoice::FromHead(names) => {
            tracing::info!("selected header row from table head: {names:?}");
            result.push_row(names);
        }
        HeaderChoice::FromBody { names, consumed: index } => {
            tracing::info!("adopted body row {index} as header: {names:?}");
            consumed = Some(index);
            result.push_row(names);
        }
        HeaderChoice::NotFound => {
            tracing::error!("no extractable header row in table");
            return LeaderboardTable::default();
        }
    }

    for (index, row) in body_rows.into_iter().enumerate() {
        if consumed == Some(index) {
            continue;
        }
        if rows::is_meaningful(&row) {
            result.push_row(row);
        }
    }

    tracing::info!(
        "finished parsing leaderboard: {} rows including header",
        result.len()
    );
    result
}

/// Cell texts of each header-section row, using the space-joined reading.
fn header_candidates(table: &Selection) -> Vec<Vec<String>> {
    let Some(thead) = dom::first_match(table, "thead") else {
        return Vec::new();
    };
    dom::select_each(&thead, "tr")
        .iter()
        .map(|row| {
            dom::select_each(row, CELL_SELECTOR)
                .iter()
                .map(dom::joined_text)
                .collect()
        })
        .collect()
}

/// Normalized cell texts of each row in the table's first body section.
fn body_candidates(table: &Selection) -> Vec<Vec<String>> {
    let Some(tbody) = dom::first_match(table, "tbody") else {
        return Vec::new();
    };
    dom::select_each(&tbody, "tr")
        .iter()
        .map(rows::normalize_row)
        .collect()
}

/// Debug-level probe of the document's structure.
///
/// The leaderboard is a Next.js app; when the static payload ships without
/// a rendered table these counts explain why extraction came back empty.
fn log_document_shape(doc: &Document) {
    let tables = doc.select("table").length();
    let iframes = doc.select("iframe").length();
    let role_tables = doc.select(ROLE_TABLE_SELECTOR).length();
    tracing::debug!("document shape: {tables} tables, {iframes} iframes, {role_tables} ARIA tables");

    let next_data = doc.select(NEXT_DATA_SELECTOR);
    if next_data.exists() {
        let payload = next_data.text();
        if payload.trim().is_empty() {
            tracing::debug!("Next.js data script present but empty");
        } else {
            match serde_json::from_str::<serde_json::Value>(&payload) {
                Ok(_) => tracing::debug!(
                    "found Next.js embedded data payload ({} bytes)",
                    payload.len()
                ),
                Err(err) => tracing::warn!("failed to parse Next.js embedded data: {err}"),
            }
        }
    } else {
        tracing::debug!("Next.js data script not found");
    }
}
