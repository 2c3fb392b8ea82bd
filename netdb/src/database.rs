//! Process-wide protocol and service database
//!
//! [`init`] loads both tables once and installs them for the rest of the
//! process. It is exclusive and idempotent: concurrent first callers wait for
//! a single load, and later callers get the installed database back. A failed
//! load installs nothing, so `init` may be retried with another
//! configuration.

use once_cell::sync::OnceCell;

use crate::config::SourceConfig;
use crate::error::{NetdbError, NetdbResult};
use crate::protocols::ProtocolTable;
use crate::services::ServiceTable;

static NETDB: OnceCell<Netdb> = OnceCell::new();

/// Both tables, loaded together
#[derive(Debug, Clone)]
pub struct Netdb {
    config: Option<SourceConfig>,
    protocols: ProtocolTable,
    services: ServiceTable,
}

impl Netdb {
    /// Load both tables named by `config`; either failing fails the load
    pub fn load(config: &SourceConfig) -> NetdbResult<Self> {
        let protocols = ProtocolTable::from_path(&config.protocols)?;
        let services = ServiceTable::from_path(&config.services)?;
        Ok(Self {
            config: Some(config.clone()),
            protocols,
            services,
        })
    }

    /// Build a database from tables that are already parsed
    pub fn from_tables(protocols: ProtocolTable, services: ServiceTable) -> Self {
        Self {
            config: None,
            protocols,
            services,
        }
    }

    /// The sources the tables were read from, `None` for [`Netdb::from_tables`]
    pub fn config(&self) -> Option<&SourceConfig> {
        self.config.as_ref()
    }

    pub fn protocols(&self) -> &ProtocolTable {
        &self.protocols
    }

    pub fn services(&self) -> &ServiceTable {
        &self.services
    }
}

/// Load the process-wide database, or return the one already loaded
pub fn init(config: &SourceConfig) -> NetdbResult<&'static Netdb> {
    let db = NETDB.get_or_try_init(|| {
        let db = Netdb::load(config)?;
        log::info!(
            "netdb initialized: {} protocols from {}, {} services from {}",
            db.protocols.len(),
            config.protocols.display(),
            db.services.len(),
            config.services.display()
        );
        Ok::<_, NetdbError>(db)
    })?;
    warn_if_different(db, config);
    Ok(db)
}

/// The process-wide database, if [`init`] has succeeded
pub fn global() -> Option<&'static Netdb> {
    NETDB.get()
}

fn warn_if_different(db: &Netdb, config: &SourceConfig) {
    let Some(loaded) = db.config() else {
        return;
    };
    if loaded != config {
        log::warn!(
            "netdb already initialized from {} and {}, ignoring {} and {}",
            loaded.protocols.display(),
            loaded.services.display(),
            config.protocols.display(),
            config.services.display()
        );
    }
}
