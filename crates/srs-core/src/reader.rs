//! SRS report reader: runs the full tokenize → split → merge → decode pipeline

use crate::coerce::coerce_columns;
use crate::error::{Error, Result};
use crate::location::decode_location_column;
use crate::merger::{master_order, merge_sections};
use crate::metadata::extract_metadata;
use crate::options::ParseOptions;
use crate::schema::{pad_sections, unified_attributes};
use crate::section::{tag_sections, Section};
use crate::splitter::split_sections;
use crate::table::{SrsTable, Unit};
use crate::tokenizer::tokenize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Column carrying sunspot group area
const AREA_COLUMN: &str = "Area";
/// Latitude column of the "regions due to return" section
const LAT_COLUMN: &str = "Lat";

/// Read an SRS report from disk with default options
pub fn read_srs<P: AsRef<Path>>(path: P) -> Result<SrsTable> {
    read_srs_with(path, &ParseOptions::default())
}

/// Read an SRS report from disk
pub fn read_srs_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<SrsTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!("Read {} lines from {}", lines.len(), path.display());
    parse_lines(lines, options)
}

/// Parse an SRS report held in a string (useful for testing)
pub fn parse_srs_str(content: &str, options: &ParseOptions) -> Result<SrsTable> {
    parse_lines(content.lines(), options)
}

/// Parse already-read report lines into the unified table
pub fn parse_lines<I, S>(lines: I, options: &ParseOptions) -> Result<SrsTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = tokenize(lines, options.max_fields);
    let meta = extract_metadata(&records);

    let mut sections: Vec<Section> = split_sections(&records)
        .iter()
        .map(|bounds| Section::build(&records, bounds))
        .collect();

    let attributes = unified_attributes(&sections);
    pad_sections(&mut sections, &attributes, &options.placeholder);
    tag_sections(&mut sections)?;

    let section_count = sections.len();
    let dropped_rows: usize = sections.iter().map(|s| s.dropped).sum();

    let mut table = merge_sections(sections, &master_order(&attributes), meta)?;
    table.dropped_rows = dropped_rows;

    if !decode_location_column(&mut table, &options.location_column)? {
        debug!(
            "No '{}' column; skipping coordinate decoding",
            options.location_column
        );
    }

    coerce_columns(&mut table);
    finish_columns(&mut table, options);

    info!(
        "Parsed SRS report: {} sections, {} rows, {} columns ({} rows dropped, {} cell issues)",
        section_count,
        table.row_count(),
        table.column_count(),
        table.dropped_rows,
        table.issues.len()
    );

    Ok(table)
}

/// Rename the Carrington longitude column and attach descriptive units
fn finish_columns(table: &mut SrsTable, options: &ParseOptions) {
    table.rename_column(&options.carrington_column, &options.carrington_rename);

    let units = [
        (AREA_COLUMN, Unit::SquareMeter),
        (LAT_COLUMN, Unit::Degree),
        (options.carrington_rename.as_str(), Unit::Degree),
    ];
    for (name, unit) in units {
        table.set_unit(name, unit);
    }
}
