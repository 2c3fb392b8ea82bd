//! Record types held by the protocol and service tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One line of the protocol table, the counterpart of `struct protoent`
///
/// Two entries are the same protocol when their numbers match; the name and
/// aliases take no part in equality or hashing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtocolEntry {
    /// Canonical protocol name
    pub name: String,
    /// Alternate names, in source order
    pub aliases: Vec<String>,
    /// Protocol number
    pub number: i32,
}

impl ProtocolEntry {
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            number,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// True when `name` is the canonical name or one of the aliases
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}

impl PartialEq for ProtocolEntry {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for ProtocolEntry {}

impl Hash for ProtocolEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl fmt::Display for ProtocolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.number)?;
        for alias in &self.aliases {
            write!(f, " {}", alias)?;
        }
        Ok(())
    }
}

/// One line of the service table, the counterpart of `struct servent`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ServiceEntry {
    /// Canonical service name
    pub name: String,
    /// Alternate names, in source order
    pub aliases: Vec<String>,
    /// Port number
    pub port: i32,
    /// Transport protocol name, taken verbatim from the source
    pub protocol: String,
}

impl ServiceEntry {
    pub fn new(name: impl Into<String>, port: i32, protocol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            port,
            protocol: protocol.into(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// True when `name` is the canonical name or one of the aliases
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }

    /// True when the entry is offered over `protocol`; empty matches any
    pub fn is_over(&self, protocol: &str) -> bool {
        protocol.is_empty() || self.protocol == protocol
    }
}

impl fmt::Display for ServiceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.name, self.port, self.protocol)?;
        for alias in &self.aliases {
            write!(f, " {}", alias)?;
        }
        Ok(())
    }
}
