//! Parse options

use crate::tokenizer::MAX_FIELDS;
use serde::{Deserialize, Serialize};

/// Knobs for [`crate::reader::parse_lines`]; the defaults match the SWPC report layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Fields kept per line
    pub max_fields: usize,
    /// Compound coordinate column decoded into latitude/longitude
    pub location_column: String,
    /// Raw Carrington longitude column
    pub carrington_column: String,
    /// Output name for the Carrington longitude column
    pub carrington_rename: String,
    /// Fill text for padded, masked cells
    pub placeholder: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_fields: MAX_FIELDS,
            location_column: "Location".to_string(),
            carrington_column: "Lo".to_string(),
            carrington_rename: "CarringtonLong".to_string(),
            placeholder: "-".to_string(),
        }
    }
}
