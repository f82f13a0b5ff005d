//! Result types for leaderboard extraction output.

use serde::Serialize;

/// Extracted leaderboard dataset.
///
/// Row 0 is the header row; every following row is one leaderboard entry.
/// Rows are kept in document order and may be ragged: a row holds exactly
/// the cells its markup had, with no padding or truncation.
///
/// An empty table is the extraction failure signal. A document with no
/// `<table>`, or a table with no usable header row, both collapse into it
/// rather than raising an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LeaderboardTable {
    rows: Vec<Vec<String>>,
}

impl LeaderboardTable {
    /// All rows, header first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row, if extraction produced one.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Data rows: everything after the header.
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Number of rows, header included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

impl From<Vec<Vec<String>>> for LeaderboardTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LeaderboardTable {
        LeaderboardTable::from(vec![
            vec!["Model".to_string(), "Score".to_string()],
            vec!["GPT-4".to_string(), "88".to_string()],
        ])
    }

    #[test]
    fn header_is_first_row() {
        let table = sample();
        assert_eq!(
            table.header(),
            Some(&["Model".to_string(), "Score".to_string()][..])
        );
    }

    #[test]
    fn data_rows_exclude_header() {
        let table = sample();
        assert_eq!(table.data_rows().len(), 1);
        assert_eq!(table.data_rows()[0][0], "GPT-4");
    }

    #[test]
    fn empty_table_has_no_header_or_data() {
        let table = LeaderboardTable::default();
        assert!(table.is_empty());
        assert_eq!(table.header(), None);
        assert!(table.data_rows().is_empty());
    }
}
