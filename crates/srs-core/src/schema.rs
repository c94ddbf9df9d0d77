//! Schema unification across sections

use crate::section::Section;
use crate::table::Column;
use std::collections::HashSet;

/// Union of column names across all sections, in first-seen order.
///
/// Empty sections contribute their header names too.
pub fn unified_attributes(sections: &[Section]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for section in sections {
        for col in &section.columns {
            if seen.insert(col.name.as_str()) {
                names.push(col.name.clone());
            }
        }
    }

    names
}

/// Give every section every attribute, adding fully masked columns where missing
pub fn pad_sections(sections: &mut [Section], attributes: &[String], placeholder: &str) {
    for section in sections.iter_mut() {
        for name in attributes {
            if section.find_column(name).is_none() {
                section
                    .columns
                    .push(Column::masked(name.clone(), section.row_count, placeholder));
            }
        }
    }
}
