//! Row construction within a group
//!
//! Single-column groups get one row per line. Two-column groups pair lines
//! consecutively (0 with 1, 2 with 3, ...); an odd trailing line is paired
//! with an explicit blank cell.

use crate::models::{Cell, ColumnMode, Line, Row};

/// Build the rows of one group
pub fn build_rows(lines: &[Line], columns: ColumnMode) -> Vec<Row> {
    match columns {
        ColumnMode::Single => lines
            .iter()
            .map(|line| Row::Single { line: line.clone() })
            .collect(),
        ColumnMode::Double => lines
            .chunks(2)
            .map(|pair| Row::Pair {
                first: pair[0].clone(),
                second: pair
                    .get(1)
                    .map(|line| Cell::Text(line.clone()))
                    .unwrap_or(Cell::Blank),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineSequence;

    #[test]
    fn test_single_column_rows() {
        let lines = LineSequence::from_text("a\nb\nc");
        let rows = build_rows(lines.as_slice(), ColumnMode::Single);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.cell_count() == 1));
    }

    #[test]
    fn test_even_couplets() {
        let lines = LineSequence::from_text("a\nb\nc\nd");
        let rows = build_rows(lines.as_slice(), ColumnMode::Double);
        assert_eq!(rows.len(), 2);
        match &rows[1] {
            Row::Pair { first, second } => {
                assert_eq!(first.as_str(), "c");
                assert_eq!(second.line().map(|l| l.as_str()), Some("d"));
            }
            other => panic!("expected pair, got {:?}", other),
        }
    }

    #[test]
    fn test_odd_couplet_gets_blank_placeholder() {
        let lines = LineSequence::from_text("a\nb\nc");
        let rows = build_rows(lines.as_slice(), ColumnMode::Double);
        assert_eq!(rows.len(), 2);
        match &rows[1] {
            Row::Pair { first, second } => {
                assert_eq!(first.as_str(), "c");
                assert!(second.is_blank());
            }
            other => panic!("expected pair, got {:?}", other),
        }
    }
}
