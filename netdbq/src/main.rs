//! netdbq main entry point
//!
//! Loads the protocol and service tables and answers the lookups given on the
//! command line. Exits 0 when every key was found, 2 when some key was not,
//! and 1 when the tables cannot be loaded.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use netdbq_lib::{run, Opt};

fn main() {
    // Initialize logging
    env_logger::init();

    let opt = Opt::parse();

    let config = match opt.source_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let db = match netdb::init(&config) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error loading netdb: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = match run(&opt, db, &mut out) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error writing results: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = out.flush() {
        eprintln!("Error writing results: {}", e);
        process::exit(1);
    }

    process::exit(outcome.exit_code());
}
