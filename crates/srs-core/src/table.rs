//! Core table types for representing a parsed SRS report

use crate::coerce::CoercionIssue;
use crate::metadata::Metadata;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Parse a single cell as a finite floating-point number.
///
/// `nan`/`inf` literals are rejected so NaN only ever fills masked cells.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Physical unit attached to a column as descriptive metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Angular degrees
    Degree,
    /// Square metres
    SquareMeter,
}

impl Unit {
    /// Short symbol used in exports
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Degree => "deg",
            Unit::SquareMeter => "m2",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Column storage, tagged once per column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum ColumnValues {
    /// Opaque text cells
    Text(Vec<String>),
    /// Floating-point cells; masked cells hold NaN
    Number(Vec<f64>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Number(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A borrowed view of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    Masked,
}

impl<'a> Value<'a> {
    /// Check if the cell is masked
    pub fn is_masked(&self) -> bool {
        matches!(self, Value::Masked)
    }

    /// Numeric content, if the cell is an unmasked number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text content, if the cell is unmasked text
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(*s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Masked => write!(f, "--"),
        }
    }
}

/// A named, typed, mask-aware column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Column name (e.g. "Nmbr" or "Location")
    pub name: String,
    /// Cell values
    pub values: ColumnValues,
    /// `true` marks a cell as absent regardless of its stored value
    pub mask: Vec<bool>,
    /// Descriptive unit, if any
    pub unit: Option<Unit>,
}

impl Column {
    /// Create an unmasked text column
    pub fn text(name: impl Into<String>, cells: Vec<String>) -> Self {
        let mask = vec![false; cells.len()];
        Self {
            name: name.into(),
            values: ColumnValues::Text(cells),
            mask,
            unit: None,
        }
    }

    /// Create a numeric column with an explicit mask
    pub fn number(name: impl Into<String>, values: Vec<f64>, mask: Vec<bool>) -> Self {
        debug_assert_eq!(values.len(), mask.len());
        Self {
            name: name.into(),
            values: ColumnValues::Number(values),
            mask,
            unit: None,
        }
    }

    /// Create a fully masked text column filled with `placeholder`
    pub fn masked(name: impl Into<String>, len: usize, placeholder: &str) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Text(vec![placeholder.to_string(); len]),
            mask: vec![true; len],
            unit: None,
        }
    }

    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    pub fn is_number(&self) -> bool {
        matches!(self.values, ColumnValues::Number(_))
    }

    /// Check if every cell is masked (vacuously true for an empty column)
    pub fn is_fully_masked(&self) -> bool {
        self.mask.iter().all(|m| *m)
    }

    /// Get a cell by row index
    pub fn get(&self, row: usize) -> Option<Value<'_>> {
        if *self.mask.get(row)? {
            return Some(Value::Masked);
        }
        match &self.values {
            ColumnValues::Text(v) => v.get(row).map(|s| Value::Text(s.as_str())),
            ColumnValues::Number(v) => v.get(row).map(|n| Value::Number(*n)),
        }
    }

    /// Unmasked cell rendered as text, whatever the column type
    pub fn text_at(&self, row: usize) -> Option<Cow<'_, str>> {
        match self.get(row)? {
            Value::Text(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Masked => None,
        }
    }

    /// Promote a text column to numbers if every unmasked cell parses.
    ///
    /// Returns `true` if the column is numeric afterwards.
    pub fn promote_if_numeric(&mut self) -> bool {
        let cells = match &self.values {
            ColumnValues::Number(_) => return true,
            ColumnValues::Text(cells) => cells,
        };

        let mut parsed = Vec::with_capacity(cells.len());
        for (cell, masked) in cells.iter().zip(&self.mask) {
            if *masked {
                parsed.push(f64::NAN);
                continue;
            }
            match parse_number(cell) {
                Some(n) => parsed.push(n),
                None => return false,
            }
        }

        self.values = ColumnValues::Number(parsed);
        true
    }

    /// Convert to a text column, rendering numbers with their shortest form
    fn into_text(self) -> Self {
        let values = match self.values {
            ColumnValues::Text(v) => ColumnValues::Text(v),
            ColumnValues::Number(v) => ColumnValues::Text(
                v.iter()
                    .zip(&self.mask)
                    .map(|(n, masked)| if *masked { String::new() } else { n.to_string() })
                    .collect(),
            ),
        };
        Self { values, ..self }
    }

    /// Re-tag a fully masked column as numeric
    fn into_masked_number(self) -> Self {
        let len = self.len();
        Self {
            values: ColumnValues::Number(vec![f64::NAN; len]),
            ..self
        }
    }

    /// Append another column's cells below this one.
    ///
    /// A fully masked side adopts the other side's type; otherwise a
    /// text/number mix falls back to text.
    pub fn append(&mut self, other: Column) {
        let name = self.name.clone();
        let this = std::mem::replace(self, Column::text(name, Vec::new()));
        let (mut this, other) = match (this.is_number(), other.is_number()) {
            (true, true) | (false, false) => (this, other),
            (false, true) if this.is_fully_masked() => (this.into_masked_number(), other),
            (true, false) if other.is_fully_masked() => (this, other.into_masked_number()),
            _ => (this.into_text(), other.into_text()),
        };

        match (&mut this.values, other.values) {
            (ColumnValues::Text(a), ColumnValues::Text(b)) => a.extend(b),
            (ColumnValues::Number(a), ColumnValues::Number(b)) => a.extend(b),
            _ => unreachable!("column types aligned above"),
        }
        this.mask.extend(other.mask);
        if this.unit.is_none() {
            this.unit = other.unit;
        }
        *self = this;
    }
}

/// The unified table produced from one SRS report
#[derive(Debug, Clone, Serialize)]
pub struct SrsTable {
    /// Columns in output order, `ID` first
    pub columns: Vec<Column>,
    /// Key/value content of the two header lines
    pub meta: Metadata,
    /// Cells that could not be coerced to numbers
    pub issues: Vec<CoercionIssue>,
    /// Section rows dropped for a field-count mismatch
    pub dropped_rows: usize,
}

impl SrsTable {
    /// Create a new empty table
    pub fn new(meta: Metadata) -> Self {
        Self {
            columns: Vec::new(),
            meta,
            issues: Vec::new(),
            dropped_rows: 0,
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Find a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get a single cell by row index and column name
    pub fn value(&self, row: usize, name: &str) -> Option<Value<'_>> {
        self.column(name)?.get(row)
    }

    /// All `(column, value)` pairs for one row
    pub fn row(&self, row: usize) -> Option<Vec<(&str, Value<'_>)>> {
        if row >= self.row_count() {
            return None;
        }
        self.columns
            .iter()
            .map(|c| c.get(row).map(|v| (c.name.as_str(), v)))
            .collect()
    }

    /// Remove a column by name, returning it
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let idx = self.column_index(name)?;
        Some(self.columns.remove(idx))
    }

    /// Rename a column; returns `false` if it does not exist
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_mut(from) {
            Some(col) => {
                col.name = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Attach a unit to a column; returns `false` if it does not exist
    pub fn set_unit(&mut self, name: &str, unit: Unit) -> bool {
        match self.column_mut(name) {
            Some(col) => {
                col.unit = Some(unit);
                true
            }
            None => false,
        }
    }
}
