//! Configuration loading for netdb
//!
//! The configuration only names the two source files. Nothing here searches
//! for them; a missing file is reported when the tables are loaded.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NetdbError, NetdbResult};

/// Default location of the protocol table
pub const DEFAULT_PROTOCOLS_PATH: &str = "/etc/protocols";

/// Default location of the service table
pub const DEFAULT_SERVICES_PATH: &str = "/etc/services";

/// Where the two tables are read from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    pub protocols: PathBuf,
    pub services: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            protocols: PathBuf::from(DEFAULT_PROTOCOLS_PATH),
            services: PathBuf::from(DEFAULT_SERVICES_PATH),
        }
    }
}

impl SourceConfig {
    pub fn new(protocols: impl Into<PathBuf>, services: impl Into<PathBuf>) -> Self {
        Self {
            protocols: protocols.into(),
            services: services.into(),
        }
    }
}

/// Load the source configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> NetdbResult<SourceConfig> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: SourceConfig = serde_json::from_reader(reader)?;

    if config.protocols.as_os_str().is_empty() || config.services.as_os_str().is_empty() {
        return Err(NetdbError::Config(format!(
            "empty source path in {}",
            path.display()
        )));
    }

    log::debug!(
        "Loaded config from {}: protocols={}, services={}",
        path.display(),
        config.protocols.display(),
        config.services.display()
    );
    Ok(config)
}
