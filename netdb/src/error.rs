//! Error definitions for netdb

use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two tables an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Protocols,
    Services,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Protocols => write!(f, "protocols"),
            Table::Services => write!(f, "services"),
        }
    }
}

/// netdb error types
///
/// Every load error is fatal for the table being loaded. Lookups never fail.
#[derive(Error, Debug)]
pub enum NetdbError {
    #[error("{table} source unavailable: {}: {source}", .path.display())]
    SourceUnavailable {
        table: Table,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{table} line {line}: malformed number {field:?}: {source}")]
    MalformedNumber {
        table: Table,
        line: usize,
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("services line {line}: missing '/' in port/protocol field {field:?}")]
    MissingProtocolSeparator { line: usize, field: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for netdb operations
pub type NetdbResult<T> = Result<T, NetdbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NetdbError::Config("test".to_string());
        assert_eq!(format!("{}", err), "Configuration error: test");
    }

    #[test]
    fn test_malformed_number_display() {
        let source = "bar".parse::<i32>().unwrap_err();
        let err = NetdbError::MalformedNumber {
            table: Table::Protocols,
            line: 3,
            field: "bar".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("protocols line 3: malformed number \"bar\""));
    }

    #[test]
    fn test_missing_separator_display() {
        let err = NetdbError::MissingProtocolSeparator {
            line: 7,
            field: "80".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "services line 7: missing '/' in port/protocol field \"80\""
        );
    }
}
