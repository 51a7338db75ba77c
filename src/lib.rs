//! Scrape "odds" sections from a single page, flatten them into records,
//! load them into SQLite and serve them over HTTP.
//!
//! The three stages run as separate binaries (`scrape`, `load`, `serve`) and
//! only share files on disk: the intermediate CSV and the SQLite store.

pub mod config;
pub mod csv;
pub mod db;
pub mod fetch;
pub mod loader;
pub mod parser;
pub mod record;
pub mod server;

use std::path::PathBuf;

pub use crate::config::Settings;
pub use db::Entry;
pub use parser::Page;
pub use record::{EntryType, Record};

/// Result type for pipeline operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the scrape, load and serve stages
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network or HTTP status failure while fetching the source page
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The loader was run before the intermediate CSV exists
    #[error("CSV not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// A query was made before the loader produced the store
    #[error("Database not found: {}", .0.display())]
    MissingStore(PathBuf),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("CSV error on line {line}: {message}")]
    Csv { line: usize, message: String },
}

/// Install the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}
