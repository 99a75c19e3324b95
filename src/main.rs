//! Contact Book - Main entry point
//!
//! Loads the contact book, runs the interactive console until an exit
//! command, then saves the book back to disk.

use anyhow::Result;
use contact_book::{run, AppContext, Config, JsonFileStore};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr so it never interleaves with replies
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using contact book at {}", config.data_file.display());

    let store = JsonFileStore::new(config.data_file.clone());
    let ctx = match AppContext::open(Box::new(store), &config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Failed to load contact book: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    run(ctx, stdin.lock(), io::stdout(), || {
        chrono::Local::now().date_naive()
    })?;

    info!("Contact book shutdown complete");
    Ok(())
}
