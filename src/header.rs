//! Header row selection heuristics.
//!
//! The leaderboard's header section has shifted shape over time: sometimes a
//! single labelled row, sometimes several rows where only one carries real
//! column labels, sometimes no header section at all. Selection tries three
//! strategies in order: recognized label matching, cell-quality scoring,
//! then adopting the first meaningful body row.

use std::collections::HashSet;

use crate::patterns::HEADER_LABELS;

/// Outcome of scanning header-section rows for recognized labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelScan {
    /// Some row contained at least one recognized label.
    Matched { index: usize, hits: usize },
    /// No row contained any recognized label.
    Unmatched,
}

/// Where the chosen header row came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HeaderChoice {
    /// Chosen from the table's header section.
    FromHead(Vec<String>),
    /// Adopted from a body row; `consumed` is that row's index so row
    /// extraction can skip it.
    FromBody { names: Vec<String>, consumed: usize },
    /// No usable header anywhere in the table.
    NotFound,
}

/// Choose a header row given the header-section rows and the normalized
/// body rows.
pub(crate) fn choose(head_rows: &[Vec<String>], body_rows: &[Vec<String>]) -> HeaderChoice {
    if head_rows.is_empty() {
        return match adopt_body_row(body_rows) {
            Some((consumed, names)) => HeaderChoice::FromBody { names, consumed },
            None => HeaderChoice::NotFound,
        };
    }

    match scan_labels(head_rows) {
        LabelScan::Matched { index, .. } => HeaderChoice::FromHead(head_rows[index].clone()),
        LabelScan::Unmatched => match best_by_cell_quality(head_rows) {
            Some(index) => HeaderChoice::FromHead(head_rows[index].clone()),
            None => HeaderChoice::NotFound,
        },
    }
}

/// Scan candidate rows for recognized column labels.
///
/// A row's score is the number of its non-empty cells whose lowercased text
/// contains any known label; a cell counts once no matter how many labels it
/// holds. The first row reaching the highest score wins: later rows must
/// strictly beat the running best to take over.
pub(crate) fn scan_labels(rows: &[Vec<String>]) -> LabelScan {
    let mut best: Option<(usize, usize)> = None;
    for (index, row) in rows.iter().enumerate() {
        let hits = label_hits(row);
        if hits > 0 && best.map_or(true, |(_, best_hits)| hits > best_hits) {
            best = Some((index, hits));
        }
    }
    match best {
        Some((index, hits)) => LabelScan::Matched { index, hits },
        None => LabelScan::Unmatched,
    }
}

fn label_hits(row: &[String]) -> usize {
    row.iter()
        .filter(|cell| {
            let lower = cell.to_lowercase();
            !lower.is_empty() && HEADER_LABELS.iter().any(|label| lower.contains(label))
        })
        .count()
}

/// Fallback scoring for header sections with no recognized labels.
///
/// A row scores +1 per distinct non-empty cell text (case-insensitive) and
/// -1 per empty cell, so scores can go negative. Ties keep the earliest row:
/// only a strictly better score replaces the running best.
pub(crate) fn best_by_cell_quality(rows: &[Vec<String>]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (index, row) in rows.iter().enumerate() {
        let score = cell_quality(row);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

fn cell_quality(row: &[String]) -> i64 {
    let mut seen: HashSet<String> = HashSet::new();
    let mut score = 0i64;
    for cell in row {
        if cell.is_empty() {
            score -= 1;
        } else if seen.insert(cell.to_lowercase()) {
            score += 1;
        }
    }
    score
}

/// Adopt the first body row holding any content as the header row.
///
/// Empty cells in the adopted row become positional `column_<n>` names
/// (1-based), so downstream consumers always see a complete header.
pub(crate) fn adopt_body_row(rows: &[Vec<String>]) -> Option<(usize, Vec<String>)> {
    rows.iter().enumerate().find_map(|(index, row)| {
        if row.iter().all(String::is_empty) {
            return None;
        }
        let names = row
            .iter()
            .enumerate()
            .map(|(position, cell)| {
                if cell.is_empty() {
                    placeholder_name(position + 1)
                } else {
                    cell.clone()
                }
            })
            .collect();
        Some((index, names))
    })
}

fn placeholder_name(position: usize) -> String {
    format!("column_{position}")
}
