//! Whitespace tokenizer for SRS report lines

/// Fields of one input line, at most `max_fields` long
pub type Record = Vec<String>;

/// Default cap on fields per line; every sub-table has at most 8 useful columns
pub const MAX_FIELDS: usize = 8;

/// Split a line on whitespace and keep the first `max_fields` fields
pub fn tokenize_line(line: &str, max_fields: usize) -> Record {
    line.split_whitespace()
        .take(max_fields)
        .map(str::to_string)
        .collect()
}

/// Tokenize every line, preserving input order
pub fn tokenize<I, S>(lines: I, max_fields: usize) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| tokenize_line(line.as_ref(), max_fields))
        .collect()
}
