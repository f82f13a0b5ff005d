//! CSV export of extracted leaderboard tables.
//!
//! Fields are quoted only when they contain a comma, quote, or line break,
//! with embedded quotes doubled.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::result::LeaderboardTable;

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(w: &mut W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        }
        first = false;
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Write `table` to `w` as CSV, header row first.
pub fn write_csv<W: Write>(mut w: W, table: &LeaderboardTable) -> io::Result<()> {
    for row in table.rows() {
        write_row(&mut w, row)?;
    }
    w.flush()
}

/// Write `table` to a CSV file at `path`, creating or truncating it.
pub fn write_csv_file(path: &Path, table: &LeaderboardTable) -> Result<()> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), table)?;
    tracing::info!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &LeaderboardTable) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, table).expect("write failed");
        String::from_utf8(buf).expect("invalid utf8")
    }

    #[test]
    fn plain_fields_are_unquoted() {
        let table = LeaderboardTable::from(vec![
            vec!["Model".to_string(), "Score".to_string()],
            vec!["Acme".to_string(), "88".to_string()],
        ]);
        assert_eq!(render(&table), "Model,Score\nAcme,88\n");
    }

    #[test]
    fn special_fields_are_quoted_and_escaped() {
        let table = LeaderboardTable::from(vec![vec![
            "a,b".to_string(),
            "say \"hi\"".to_string(),
            "line\nbreak".to_string(),
            "plain".to_string(),
        ]]);
        assert_eq!(
            render(&table),
            "\"a,b\",\"say \"\"hi\"\"\",\"line\nbreak\",plain\n"
        );
    }

    #[test]
    fn empty_table_writes_nothing() {
        let table = LeaderboardTable::default();
        assert_eq!(render(&table), "");
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let table = LeaderboardTable::from(vec![
            vec!["Model".to_string(), "Score".to_string()],
            vec!["Acme".to_string(), "88".to_string()],
        ]);

        write_csv_file(&path, &table).expect("write failed");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "Model,Score\nAcme,88\n");
    }
}
