//! Sub-table builder and section identity labels

use crate::error::{Error, Result};
use crate::splitter::SectionBounds;
use crate::table::Column;
use crate::tokenizer::Record;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the synthetic identity column
pub const ID_COLUMN: &str = "ID";

/// Positional label of a section in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    /// Regions with sunspots
    I,
    /// H-alpha plages without spots
    IA,
    /// Regions due to return
    II,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::I, SectionId::IA, SectionId::II];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::I => "I",
            SectionId::IA => "IA",
            SectionId::II => "II",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sub-table of the report
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Columns in header order
    pub columns: Vec<Column>,
    /// Rows admitted into the section
    pub row_count: usize,
    /// Candidate rows dropped for having the wrong field count
    pub dropped: usize,
}

impl Section {
    /// Build a section from the header and candidate rows in `bounds`.
    ///
    /// Rows are admitted only when their field count equals the header's.
    /// Columns of a non-empty section are promoted to numbers when every
    /// cell parses.
    pub fn build(records: &[Record], bounds: &SectionBounds) -> Self {
        let header: &[String] = records.get(bounds.header).map(Vec::as_slice).unwrap_or(&[]);
        let candidates = records.get(bounds.rows.clone()).unwrap_or(&[]);

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); header.len()];
        let mut row_count = 0;
        let mut dropped = 0;

        for record in candidates {
            if record.is_empty() {
                continue;
            }
            if record.len() != header.len() {
                dropped += 1;
                continue;
            }
            for (column, field) in cells.iter_mut().zip(record) {
                column.push(field.clone());
            }
            row_count += 1;
        }

        let mut columns: Vec<Column> = header
            .iter()
            .zip(cells)
            .map(|(name, values)| Column::text(name.clone(), values))
            .collect();

        if row_count > 0 {
            for column in &mut columns {
                if column.promote_if_numeric() {
                    debug!("Promoted section column '{}' to numbers", column.name);
                }
            }
        }

        debug!(
            "Section at line {}: {} columns, {} rows admitted, {} dropped",
            bounds.marker,
            columns.len(),
            row_count,
            dropped
        );

        Self {
            columns,
            row_count,
            dropped,
        }
    }

    /// Check if the section has no rows
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Find a column by name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Append the `ID` column labelling every row with `id`
    pub fn tag(&mut self, id: SectionId) {
        let labels = vec![id.as_str().to_string(); self.row_count];
        self.columns.push(Column::text(ID_COLUMN, labels));
    }
}

/// Tag each section with its positional label: 0 -> I, 1 -> IA, 2 -> II
pub fn tag_sections(sections: &mut [Section]) -> Result<()> {
    if sections.len() > SectionId::ALL.len() {
        return Err(Error::UnsupportedSectionCount {
            found: sections.len(),
        });
    }
    for (section, id) in sections.iter_mut().zip(SectionId::ALL) {
        section.tag(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::split_sections;
    use crate::table::{ColumnValues, Value};
    use crate::tokenizer::{tokenize, MAX_FIELDS};

    fn build_single(lines: &[&str]) -> Section {
        let records = tokenize(lines.iter().copied(), MAX_FIELDS);
        let bounds = split_sections(&records);
        Section::build(&records, &bounds[0])
    }

    #[test]
    fn test_build_promotes_numeric_columns() {
        let section = build_single(&[
            "I.  Regions with Sunspots.",
            "Nmbr Location  Lo  Area  Z",
            "2246 S15W73   143  0190 Hsx",
            "2247 N05W023  45   20   Cao",
        ]);

        assert_eq!(section.row_count, 2);
        assert_eq!(section.dropped, 0);
        assert!(section.find_column("Nmbr").unwrap().is_number());
        assert!(!section.find_column("Location").unwrap().is_number());
        assert!(!section.find_column("Z").unwrap().is_number());
        assert_eq!(
            section.find_column("Area").unwrap().values,
            ColumnValues::Number(vec![190.0, 20.0])
        );
    }

    #[test]
    fn test_build_drops_mismatched_rows() {
        let section = build_single(&[
            "IA. H-alpha Plages without Spots.",
            "Nmbr  Location  Lo",
            "None",
            "2241  N09W90   122",
            "2242  N09W90   122 extra",
        ]);

        assert_eq!(section.row_count, 1);
        assert_eq!(section.dropped, 2);
    }

    #[test]
    fn test_empty_section_keeps_text_columns() {
        let section = build_single(&["IA. H-alpha Plages", "Nmbr  Location  Lo", "None"]);

        assert!(section.is_empty());
        assert_eq!(section.columns.len(), 3);
        assert!(section.columns.iter().all(|c| !c.is_number() && c.is_empty()));
    }

    #[test]
    fn test_tag_sections_by_position() {
        let mut sections = vec![
            build_single(&["I.", "A", "1"]),
            build_single(&["I.", "A", "2", "3"]),
        ];
        tag_sections(&mut sections).unwrap();

        let ids = sections[1].find_column(ID_COLUMN).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids.get(0), Some(Value::Text("IA")));
        assert_eq!(
            sections[0].find_column(ID_COLUMN).unwrap().get(0),
            Some(Value::Text("I"))
        );
    }

    #[test]
    fn test_tag_rejects_fourth_section() {
        let mut sections = vec![build_single(&["I.", "A", "1"]); 4];
        let err = tag_sections(&mut sections).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSectionCount { found: 4 }));
    }
}
