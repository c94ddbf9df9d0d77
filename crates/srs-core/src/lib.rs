//! srs-core: Core library for parsing Solar Region Summary (SRS) reports
//!
//! This library provides functionality to:
//! - Tokenize report lines and extract the two header metadata lines
//! - Split the report into its I / IA / II sub-tables
//! - Unify the sub-table schemas and merge them into one masked table
//! - Decode compound locations into signed latitude/longitude columns
//! - Coerce columns to numbers and export the result as CSV or JSON

pub mod coerce;
pub mod error;
pub mod export;
pub mod location;
pub mod merger;
pub mod metadata;
pub mod options;
pub mod reader;
pub mod schema;
pub mod section;
pub mod splitter;
pub mod table;
pub mod tokenizer;

pub use coerce::CoercionIssue;
pub use error::{Error, Result};
pub use location::{decode_location, Coordinate};
pub use metadata::Metadata;
pub use options::ParseOptions;
pub use reader::{parse_lines, parse_srs_str, read_srs, read_srs_with};
pub use section::SectionId;
pub use table::{Column, ColumnValues, SrsTable, Unit, Value};
