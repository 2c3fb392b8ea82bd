//! Protocol table, the `/etc/protocols` side of netdb
//!
//! Lookups scan the entries in source order and return the first match, so
//! a duplicated number or name resolves to its earliest line.

use std::fs;
use std::path::Path;
use std::slice;
use std::str::FromStr;

use crate::error::{NetdbError, NetdbResult, Table};
use crate::parse;
use crate::types::ProtocolEntry;

/// Immutable, ordered list of protocol entries
#[derive(Debug, Clone, Default)]
pub struct ProtocolTable {
    entries: Vec<ProtocolEntry>,
}

impl ProtocolTable {
    /// Parse the full text of a protocol source
    ///
    /// Fails on the first line whose number field is not a base-10 `i32`;
    /// nothing is returned for a partially valid source.
    pub fn parse(text: &str) -> NetdbResult<Self> {
        let mut entries = Vec::new();

        for record in parse::records(text) {
            let number = parse::number(Table::Protocols, record.line, record.value)?;
            entries.push(ProtocolEntry {
                name: record.name.to_string(),
                aliases: record.owned_aliases(),
                number,
            });
        }

        log::debug!(
            "Parsed {} protocols from {} lines",
            entries.len(),
            parse::line_count(text)
        );

        Ok(Self { entries })
    }

    /// Read and parse a protocol source file
    pub fn from_path<P: AsRef<Path>>(path: P) -> NetdbResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| NetdbError::SourceUnavailable {
            table: Table::Protocols,
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes from: {}", text.len(), path.display());
        Self::parse(&text)
    }

    /// First entry with the given protocol number
    pub fn by_number(&self, number: i32) -> Option<&ProtocolEntry> {
        self.entries.iter().find(|entry| entry.number == number)
    }

    /// First entry whose name or one of whose aliases is `name`
    pub fn by_name(&self, name: &str) -> Option<&ProtocolEntry> {
        self.entries.iter().find(|entry| entry.is_named(name))
    }

    pub fn entries(&self) -> &[ProtocolEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, ProtocolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for ProtocolTable {
    type Err = NetdbError;

    fn from_str(text: &str) -> NetdbResult<Self> {
        Self::parse(text)
    }
}

impl<'a> IntoIterator for &'a ProtocolTable {
    type Item = &'a ProtocolEntry;
    type IntoIter = slice::Iter<'a, ProtocolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
