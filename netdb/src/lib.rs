//! netdb - protocol and service database lookups
//!
//! Parses the protocol table (`/etc/protocols` layout) and the service table
//! (`/etc/services` layout) once and answers the classic lookups against
//! them: protocol by number, protocol by name, service by name and service by
//! port.

pub mod config;
pub mod database;
pub mod error;
mod parse;
pub mod protocols;
pub mod services;
pub mod types;

pub use config::*;
pub use database::*;
pub use error::*;
pub use protocols::*;
pub use services::*;
pub use types::*;
