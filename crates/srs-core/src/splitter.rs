//! Section splitter: locates the I / IA / II sub-tables

use crate::tokenizer::Record;
use std::ops::Range;

/// Line ranges of one section within the tokenized report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBounds {
    /// Index of the marker line (e.g. "I.  Regions with Sunspots")
    pub marker: usize,
    /// Index of the column-name header line
    pub header: usize,
    /// Candidate data rows
    pub rows: Range<usize>,
}

/// A record starts a section if its first field begins with `I`
pub fn is_marker(record: &Record) -> bool {
    record
        .first()
        .is_some_and(|field| field.starts_with('I'))
}

/// Find all section markers and partition the records between them
pub fn split_sections(records: &[Record]) -> Vec<SectionBounds> {
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| is_marker(r))
        .map(|(i, _)| i)
        .collect();
    indices.push(records.len());

    indices
        .windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            SectionBounds {
                marker: start,
                header: start + 1,
                rows: (start + 2).min(end)..end,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, MAX_FIELDS};

    #[test]
    fn test_split_three_sections() {
        let records = tokenize(
            [
                ":Product: 0101SRS.txt",
                ":Issued: 2015 Jan 01 0030 UTC",
                "I.  Regions with Sunspots.",
                "Nmbr Location  Lo  Area",
                "2246 S15W73   143  0190",
                "IA. H-alpha Plages without Spots.",
                "Nmbr  Location  Lo",
                "None",
                "II. Regions Due to Return",
                "Nmbr Lat    Lo",
                "2230 S05    330",
                "2231 N10    310",
            ],
            MAX_FIELDS,
        );
        let sections = split_sections(&records);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].header, 3);
        assert_eq!(sections[0].rows, 4..5);
        assert_eq!(sections[1].rows, 7..8);
        assert_eq!(sections[2].rows, 10..12);
    }

    #[test]
    fn test_no_markers() {
        let records = tokenize(["a b", "c d"], MAX_FIELDS);
        assert!(split_sections(&records).is_empty());
    }

    #[test]
    fn test_blank_lines_are_not_markers() {
        let records = tokenize(["", "I. Regions", "Nmbr"], MAX_FIELDS);
        let sections = split_sections(&records);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].marker, 1);
        assert!(sections[0].rows.is_empty());
    }

    #[test]
    fn test_marker_on_last_line() {
        let records = tokenize(["x", "II. Regions Due to Return"], MAX_FIELDS);
        let sections = split_sections(&records);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header, 2);
        assert!(sections[0].rows.is_empty());
    }
}
