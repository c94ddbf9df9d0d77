//! CSV and JSON export of a parsed table

use crate::error::Result;
use crate::table::{SrsTable, Value};
use serde_json::{json, Map};
use std::io::Write;

/// Write the table as CSV; masked cells are written empty
pub fn write_csv<W: Write>(table: &SrsTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(table.column_names())?;

    for row in 0..table.row_count() {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|col| col.text_at(row).map(|t| t.into_owned()).unwrap_or_default())
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn cell_to_json(value: Value<'_>) -> serde_json::Value {
    if value.is_masked() {
        return serde_json::Value::Null;
    }
    match (value.as_f64(), value.as_str()) {
        (Some(n), _) => json!(n),
        (None, Some(s)) => json!(s),
        (None, None) => serde_json::Value::Null,
    }
}

/// Row-oriented JSON document with metadata, column units and issues
pub fn to_json(table: &SrsTable) -> serde_json::Value {
    let meta: Map<String, serde_json::Value> = table
        .meta
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect();

    let columns: Vec<serde_json::Value> = table
        .columns
        .iter()
        .map(|c| {
            json!({
                "name": c.name,
                "kind": if c.is_number() { "number" } else { "text" },
                "unit": c.unit.map(|u| u.symbol()),
            })
        })
        .collect();

    let rows: Vec<serde_json::Value> = (0..table.row_count())
        .map(|row| {
            let cells: Map<String, serde_json::Value> = table
                .columns
                .iter()
                .map(|c| {
                    let value = c.get(row).map(cell_to_json).unwrap_or_default();
                    (c.name.clone(), value)
                })
                .collect();
            serde_json::Value::Object(cells)
        })
        .collect();

    json!({
        "meta": meta,
        "columns": columns,
        "rows": rows,
        "issues": table.issues,
    })
}
