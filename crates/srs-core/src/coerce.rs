//! Final per-column numeric coercion over the merged table

use crate::table::{parse_number, ColumnValues, SrsTable};
use serde::Serialize;
use tracing::{debug, warn};

/// An unmasked cell in a coerced column that is not a number.
///
/// The cell is masked in the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoercionIssue {
    pub column: String,
    pub row: usize,
    pub value: String,
}

impl std::fmt::Display for CoercionIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "non-numeric value '{}' in column '{}' at row {}",
            self.value, self.column, self.row
        )
    }
}

/// Promote every text column holding at least one numeric unmasked cell.
///
/// Numeric columns are left untouched. Cells in a promoted column that do
/// not parse become masked and are recorded in `table.issues`.
pub fn coerce_columns(table: &mut SrsTable) {
    let mut issues = Vec::new();

    for column in table.columns.iter_mut() {
        let cells = match &column.values {
            ColumnValues::Number(_) => continue,
            ColumnValues::Text(cells) => cells,
        };

        let parsed: Vec<Option<f64>> = cells
            .iter()
            .zip(&column.mask)
            .map(|(cell, masked)| if *masked { None } else { parse_number(cell) })
            .collect();

        if parsed.iter().all(Option::is_none) {
            continue;
        }

        let mut values = Vec::with_capacity(parsed.len());
        for (row, (number, cell)) in parsed.into_iter().zip(cells).enumerate() {
            match number {
                Some(n) => values.push(n),
                None => {
                    if !column.mask[row] {
                        let issue = CoercionIssue {
                            column: column.name.clone(),
                            row,
                            value: cell.clone(),
                        };
                        warn!("{}", issue);
                        issues.push(issue);
                        column.mask[row] = true;
                    }
                    values.push(f64::NAN);
                }
            }
        }

        debug!("Coerced column '{}' to numbers", column.name);
        column.values = ColumnValues::Number(values);
    }

    table.issues.extend(issues);
}
