//! Service table, the `/etc/services` side of netdb
//!
//! The value field of a service line is `port/protocol`. The protocol part is
//! kept verbatim, even when empty, and is never checked against the protocol
//! table.

use std::fs;
use std::path::Path;
use std::slice;
use std::str::FromStr;

use crate::error::{NetdbError, NetdbResult, Table};
use crate::parse;
use crate::types::ServiceEntry;

/// Immutable, ordered list of service entries
#[derive(Debug, Clone, Default)]
pub struct ServiceTable {
    entries: Vec<ServiceEntry>,
}

impl ServiceTable {
    /// Parse the full text of a service source
    ///
    /// A port that is not a base-10 `i32`, or a value field without `/`,
    /// fails the whole load.
    pub fn parse(text: &str) -> NetdbResult<Self> {
        let mut entries = Vec::new();

        for record in parse::records(text) {
            let (port, protocol) = record.value.split_once('/').ok_or_else(|| {
                NetdbError::MissingProtocolSeparator {
                    line: record.line,
                    field: record.value.to_string(),
                }
            })?;
            let port = parse::number(Table::Services, record.line, port)?;

            entries.push(ServiceEntry {
                name: record.name.to_string(),
                aliases: record.owned_aliases(),
                port,
                protocol: protocol.to_string(),
            });
        }

        log::debug!(
            "Parsed {} services from {} lines",
            entries.len(),
            parse::line_count(text)
        );

        Ok(Self { entries })
    }

    /// Read and parse a service source file
    pub fn from_path<P: AsRef<Path>>(path: P) -> NetdbResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| NetdbError::SourceUnavailable {
            table: Table::Services,
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes from: {}", text.len(), path.display());
        Self::parse(&text)
    }

    /// First entry named `name` (or aliased so) offered over `protocol`
    ///
    /// An empty `protocol` matches entries of any protocol.
    pub fn by_name(&self, name: &str, protocol: &str) -> Option<&ServiceEntry> {
        self.entries
            .iter()
            .find(|entry| entry.is_over(protocol) && entry.is_named(name))
    }

    /// First entry on `port` offered over `protocol`
    ///
    /// An empty `protocol` matches entries of any protocol.
    pub fn by_port(&self, port: i32, protocol: &str) -> Option<&ServiceEntry> {
        self.entries
            .iter()
            .find(|entry| entry.port == port && entry.is_over(protocol))
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, ServiceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for ServiceTable {
    type Err = NetdbError;

    fn from_str(text: &str) -> NetdbResult<Self> {
        Self::parse(text)
    }
}

impl<'a> IntoIterator for &'a ServiceTable {
    type Item = &'a ServiceEntry;
    type IntoIter = slice::Iter<'a, ServiceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
# Network services, Internet style
ssh             22/tcp                          # SSH Remote Login Protocol
domain          53/tcp                          # Domain Name Server
domain          53/udp
http            80/tcp          www             # WorldWideWeb HTTP
kerberos        88/tcp          kerberos5 krb5 kerberos-sec
kerberos        88/udp          kerberos5 krb5 kerberos-sec
https           443/tcp
https           443/udp                         # HTTP/3
";

    #[test]
    fn test_http_scenario() {
        let table = ServiceTable::parse("http 80/tcp www\n").unwrap();
        assert_eq!(table.len(), 1);

        let http = table.by_name("www", "").unwrap();
        assert_eq!(http.name, "http");
        assert_eq!(http.port, 80);
        assert_eq!(http.protocol, "tcp");
        assert_eq!(http.aliases, vec!["www"]);

        assert!(table.by_port(80, "udp").is_none());
        assert_eq!(table.by_port(80, "").unwrap().name, "http");
        assert_eq!(table.by_port(80, "tcp").unwrap().name, "http");
    }

    #[test]
    fn test_by_port_protocol_filter() {
        let table = ServiceTable::parse(SAMPLE).unwrap();
        assert_eq!(table.by_port(53, "").unwrap().protocol, "tcp");
        assert_eq!(table.by_port(53, "udp").unwrap().protocol, "udp");
        assert!(table.by_port(22, "udp").is_none());
        assert!(table.by_port(8080, "").is_none());
    }

    #[test]
    fn test_by_name_protocol_filter() {
        let table = ServiceTable::parse(SAMPLE).unwrap();
        assert_eq!(table.by_name("krb5", "").unwrap().protocol, "tcp");
        assert_eq!(table.by_name("krb5", "udp").unwrap().protocol, "udp");
        assert_eq!(table.by_name("https", "udp").unwrap().port, 443);
        assert!(table.by_name("ssh", "udp").is_none());
        assert!(table.by_name("gopher", "").is_none());
    }

    #[test]
    fn test_by_name_earlier_canonical_wins() {
        let text = "web 8080/tcp\nhttp 80/tcp web\n";
        let table = ServiceTable::parse(text).unwrap();
        assert_eq!(table.by_name("web", "").unwrap().port, 8080);
    }

    #[test]
    fn test_empty_protocol_kept_verbatim() {
        let table = ServiceTable::parse("odd 9/ sink").unwrap();
        let entry = table.by_port(9, "").unwrap();
        assert_eq!(entry.protocol, "");
        assert_eq!(entry.aliases, vec!["sink"]);
        assert!(table.by_port(9, "tcp").is_none());
    }

    #[test]
    fn test_split_on_first_slash() {
        let table = ServiceTable::parse("weird 10/tcp/extra").unwrap();
        assert_eq!(table.entries()[0].protocol, "tcp/extra");
    }

    #[test]
    fn test_missing_separator_fails_load() {
        let err = ServiceTable::parse("ssh 22/tcp\nbroken 80\n").unwrap_err();
        match err {
            NetdbError::MissingProtocolSeparator { line, field } => {
                assert_eq!(line, 2);
                assert_eq!(field, "80");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_port_fails_load() {
        let err = ServiceTable::parse("http www/tcp\n").unwrap_err();
        match err {
            NetdbError::MalformedNumber { table, line, field, .. } => {
                assert_eq!(table, Table::Services);
                assert_eq!(line, 1);
                assert_eq!(field, "www");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_short_lines_skipped() {
        let table = ServiceTable::parse("lonely\n\n# 80/tcp\nssh 22/tcp\n").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iteration_in_source_order() {
        let table: ServiceTable = SAMPLE.parse().unwrap();
        let ports: Vec<_> = (&table).into_iter().map(|entry| entry.port).collect();
        assert_eq!(ports, vec![22, 53, 53, 80, 88, 88, 443, 443]);
    }

    #[test]
    fn test_from_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = ServiceTable::from_path(temp_file.path()).unwrap();
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceTable::from_path(dir.path().join("services")).unwrap_err();
        assert!(matches!(
            err,
            NetdbError::SourceUnavailable {
                table: Table::Services,
                ..
            }
        ));
    }
}
