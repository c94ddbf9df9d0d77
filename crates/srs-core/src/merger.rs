//! Master merger: stacks padded, tagged sections into one table

use crate::error::{Error, Result};
use crate::metadata::Metadata;
use crate::section::{Section, ID_COLUMN};
use crate::table::{Column, SrsTable};

/// Master column order: `ID` first, then the unified attributes
pub fn master_order(attributes: &[String]) -> Vec<String> {
    std::iter::once(ID_COLUMN.to_string())
        .chain(attributes.iter().filter(|a| *a != ID_COLUMN).cloned())
        .collect()
}

/// Append every section's rows, in section order, into a single table.
///
/// Each section must already carry every column named in `order`.
pub fn merge_sections(
    sections: Vec<Section>,
    order: &[String],
    meta: Metadata,
) -> Result<SrsTable> {
    let mut master: Vec<Column> = order
        .iter()
        .map(|name| Column::text(name.clone(), Vec::new()))
        .collect();

    for mut section in sections {
        for target in master.iter_mut() {
            let idx = section
                .columns
                .iter()
                .position(|c| c.name == target.name)
                .ok_or_else(|| Error::MissingColumn(target.name.clone()))?;
            target.append(section.columns.swap_remove(idx));
        }
    }

    let mut table = SrsTable::new(meta);
    table.columns = master;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{pad_sections, unified_attributes};
    use crate::section::tag_sections;
    use crate::splitter::split_sections;
    use crate::table::Value;
    use crate::tokenizer::{tokenize, MAX_FIELDS};

    fn merged(lines: &[&str]) -> SrsTable {
        let records = tokenize(lines.iter().copied(), MAX_FIELDS);
        let mut sections: Vec<Section> = split_sections(&records)
            .iter()
            .map(|b| Section::build(&records, b))
            .collect();
        let attributes = unified_attributes(&sections);
        pad_sections(&mut sections, &attributes, "-");
        tag_sections(&mut sections).unwrap();
        merge_sections(sections, &master_order(&attributes), Metadata::default()).unwrap()
    }

    #[test]
    fn test_master_order_puts_id_first() {
        let order = master_order(&["Nmbr".to_string(), "Lo".to_string()]);
        assert_eq!(order, vec!["ID", "Nmbr", "Lo"]);
    }

    #[test]
    fn test_merge_preserves_section_and_row_order() {
        let table = merged(&[
            "I.",
            "Nmbr Area",
            "1 200",
            "2 300",
            "IA.",
            "Nmbr Lo",
            "3 122",
            "II.",
            "Nmbr Lat",
            "4 S05",
        ]);

        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_names(), vec!["ID", "Nmbr", "Area", "Lo", "Lat"]);

        let nmbr = table.column("Nmbr").unwrap();
        assert!(nmbr.is_number());
        let ids: Vec<String> = (0..4)
            .map(|r| table.value(r, "ID").unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["I", "I", "IA", "II"]);
        assert_eq!(table.value(1, "Nmbr"), Some(Value::Number(2.0)));
        assert_eq!(table.value(2, "Area"), Some(Value::Masked));
        assert_eq!(table.value(2, "Lo"), Some(Value::Number(122.0)));
        assert_eq!(table.value(3, "Lat"), Some(Value::Text("S05")));
    }

    #[test]
    fn test_every_row_has_every_column() {
        let table = merged(&["I.", "A B", "1 2", "II.", "B C", "x y", "z w"]);

        for row in 0..table.row_count() {
            let cells = table.row(row).unwrap();
            assert_eq!(cells.len(), table.column_count());
        }
        assert!(table.row(table.row_count()).is_none());
    }

    #[test]
    fn test_empty_section_adds_columns_not_rows() {
        let table = merged(&["I.", "Nmbr Lo", "1 2", "IA.", "Nmbr Location Lo", "garbage"]);
        assert_eq!(table.row_count(), 1);
        assert!(table.column("Location").is_some());
        assert_eq!(table.value(0, "Location"), Some(Value::Masked));
    }

    #[test]
    fn test_merge_missing_column_is_error() {
        let sections = vec![];
        let table = merge_sections(sections, &["ID".to_string()], Metadata::default()).unwrap();
        assert_eq!(table.row_count(), 0);

        let records = tokenize(["I.", "A", "1"], MAX_FIELDS);
        let section = Section::build(&records, &split_sections(&records)[0]);
        let err = merge_sections(vec![section], &["ID".to_string()], Metadata::default())
            .unwrap_err();
        assert!(matches!(err, Error::MissingColumn(name) if name == "ID"));
    }
}
