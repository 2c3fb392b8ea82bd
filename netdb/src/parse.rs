//! Line tokenizer shared by the protocol and service tables
//!
//! Both sources use the same layout:
//!
//! ```text
//! name  value  [alias...]   [# comment]
//! ```
//!
//! Lines are split on `\n` only, trimmed, cut at the first `#`, and split on
//! runs of whitespace. Lines with fewer than two fields are skipped.

use std::num::ParseIntError;

use crate::error::{NetdbError, NetdbResult, Table};

/// The fields of one significant source line
#[derive(Debug)]
pub(crate) struct Record<'a> {
    /// 1-based physical line number
    pub line: usize,
    pub name: &'a str,
    pub value: &'a str,
    pub aliases: Vec<&'a str>,
}

impl<'a> Record<'a> {
    pub fn owned_aliases(&self) -> Vec<String> {
        self.aliases.iter().map(|alias| alias.to_string()).collect()
    }
}

/// Split a single line into its whitespace separated fields, comment removed
pub(crate) fn fields(line: &str) -> Vec<&str> {
    let line = line.trim();
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    line.split_whitespace().collect()
}

/// Iterate over the significant lines of `text`
pub(crate) fn records(text: &str) -> impl Iterator<Item = Record<'_>> {
    text.split('\n').enumerate().filter_map(|(idx, line)| {
        let fields = fields(line);
        if fields.len() < 2 {
            if !fields.is_empty() {
                log::trace!("skipping short line {}: {:?}", idx + 1, line);
            }
            return None;
        }
        Some(Record {
            line: idx + 1,
            name: fields[0],
            value: fields[1],
            aliases: fields[2..].to_vec(),
        })
    })
}

/// Number of physical lines in `text`, as counted by [`records`]
pub(crate) fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Parse a base-10 32-bit number, reporting the line on failure
pub(crate) fn number(table: Table, line: usize, field: &str) -> NetdbResult<i32> {
    field
        .parse::<i32>()
        .map_err(|source: ParseIntError| NetdbError::MalformedNumber {
            table,
            line,
            field: field.to_string(),
            source,
        })
}
