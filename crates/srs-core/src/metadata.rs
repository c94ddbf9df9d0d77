//! Report metadata taken from the two leading header lines

use crate::tokenizer::Record;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Ordered key/value metadata attached to a parsed table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    /// Insert or replace an entry, keeping first-insertion order
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse the `Issued` entry, e.g. `2015 Jan 01 0030 UTC`
    pub fn issued(&self) -> Option<NaiveDateTime> {
        let raw = self.get("Issued")?;
        let raw = raw.trim().trim_end_matches("UTC").trim_end();
        NaiveDateTime::parse_from_str(raw, "%Y %b %d %H%M").ok()
    }
}

/// Strip every non-alphabetic character from a header label
fn normalize_key(label: &str) -> String {
    label.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

/// Build metadata from the first two records.
///
/// Line 0 contributes `key -> field 1`, line 1 contributes
/// `key -> fields 1.. joined by spaces`. If either line is missing
/// its fields the metadata is left empty.
pub fn extract_metadata(records: &[Record]) -> Metadata {
    let mut meta = Metadata::default();

    let (first, second) = match (records.first(), records.get(1)) {
        (Some(first), Some(second)) if first.len() >= 2 && !second.is_empty() => {
            (first, second)
        }
        _ => {
            warn!("SRS metadata is not available");
            return meta;
        }
    };

    meta.insert(normalize_key(&first[0]), first[1].clone());
    meta.insert(normalize_key(&second[0]), second[1..].join(" "));
    meta
}
