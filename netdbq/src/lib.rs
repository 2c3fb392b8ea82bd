//! netdbq - getent style queries against the netdb tables
//!
//! ```text
//! netdbq protocols            # every protocol entry
//! netdbq protocols 6 udp      # by number, by name or alias
//! netdbq services www/tcp 53  # by name or port, optionally per protocol
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use netdb::{load_config, Netdb, NetdbResult, SourceConfig};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "netdbq", version, about = "Query the protocol and service tables")]
pub struct Opt {
    /// JSON file naming the protocol and service sources
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Protocol table to read, overrides the configuration
    #[arg(long)]
    pub protocols: Option<PathBuf>,

    /// Service table to read, overrides the configuration
    #[arg(long)]
    pub services: Option<PathBuf>,

    /// Print one JSON object per entry instead of source lines
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub database: Database,
}

#[derive(Debug, Subcommand)]
pub enum Database {
    /// Look up protocols by number or name. No key lists the whole table.
    Protocols {
        #[arg(allow_negative_numbers = true)]
        keys: Vec<String>,
    },
    /// Look up services by name or port, as KEY or KEY/PROTOCOL. No key lists
    /// the whole table.
    Services {
        #[arg(allow_negative_numbers = true)]
        keys: Vec<String>,
    },
}

impl Opt {
    /// Resolve the sources: defaults, then the config file, then the flags
    pub fn source_config(&self) -> NetdbResult<SourceConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SourceConfig::default(),
        };
        if let Some(path) = &self.protocols {
            config.protocols = path.clone();
        }
        if let Some(path) = &self.services {
            config.services = path.clone();
        }
        Ok(config)
    }
}

/// A protocol query key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolKey<'a> {
    Number(i32),
    Name(&'a str),
}

impl<'a> ProtocolKey<'a> {
    pub fn parse(key: &'a str) -> Self {
        match key.parse::<i32>() {
            Ok(number) => ProtocolKey::Number(number),
            Err(_) => ProtocolKey::Name(key),
        }
    }
}

/// A service query key, `KEY` or `KEY/PROTOCOL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceKey<'a> {
    Port(i32, &'a str),
    Name(&'a str, &'a str),
}

impl<'a> ServiceKey<'a> {
    pub fn parse(key: &'a str) -> Self {
        let (key, protocol) = key.split_once('/').unwrap_or((key, ""));
        match key.parse::<i32>() {
            Ok(port) => ServiceKey::Port(port, protocol),
            Err(_) => ServiceKey::Name(key, protocol),
        }
    }
}

/// Whether every requested key was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AllFound,
    SomeMissing,
}

impl Outcome {
    /// Process exit status, following getent
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::AllFound => 0,
            Outcome::SomeMissing => 2,
        }
    }
}

/// Answer the query in `opt` against `db`, writing hits to `out`
pub fn run<W: Write>(opt: &Opt, db: &Netdb, out: &mut W) -> NetdbResult<Outcome> {
    let mut printer = Printer { out, json: opt.json };
    let mut missing = 0;

    match &opt.database {
        Database::Protocols { keys } if keys.is_empty() => {
            for entry in db.protocols() {
                printer.print(entry)?;
            }
        }
        Database::Protocols { keys } => {
            for key in keys {
                let entry = match ProtocolKey::parse(key) {
                    ProtocolKey::Number(number) => db.protocols().by_number(number),
                    ProtocolKey::Name(name) => db.protocols().by_name(name),
                };
                match entry {
                    Some(entry) => printer.print(entry)?,
                    None => {
                        log::debug!("protocol {:?} not found", key);
                        missing += 1;
                    }
                }
            }
        }
        Database::Services { keys } if keys.is_empty() => {
            for entry in db.services() {
                printer.print(entry)?;
            }
        }
        Database::Services { keys } => {
            for key in keys {
                let entry = match ServiceKey::parse(key) {
                    ServiceKey::Port(port, protocol) => db.services().by_port(port, protocol),
                    ServiceKey::Name(name, protocol) => db.services().by_name(name, protocol),
                };
                match entry {
                    Some(entry) => printer.print(entry)?,
                    None => {
                        log::debug!("service {:?} not found", key);
                        missing += 1;
                    }
                }
            }
        }
    }

    if missing == 0 {
        Ok(Outcome::AllFound)
    } else {
        Ok(Outcome::SomeMissing)
    }
}

struct Printer<'w, W: Write> {
    out: &'w mut W,
    json: bool,
}

impl<W: Write> Printer<'_, W> {
    fn print<T: Serialize + std::fmt::Display>(&mut self, entry: &T) -> NetdbResult<()> {
        if self.json {
            serde_json::to_writer(&mut *self.out, entry)?;
            writeln!(self.out)?;
        } else {
            writeln!(self.out, "{}", entry)?;
        }
        Ok(())
    }
}
