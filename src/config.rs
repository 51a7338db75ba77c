use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;

use crate::Result;

pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/Sports_betting";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const CSV_FILE: &str = "best_sports_betting_odds.csv";
const DB_FILE: &str = "best_sports_betting_odds.db";

/// Runtime settings shared by the three binaries.
///
/// Defaults point at files in the project root; any field can be overridden
/// through an `ODDS_`-prefixed environment variable, e.g. `ODDS_DB_PATH`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub url: String,
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    pub bind: String,
    pub timeout_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let root = project_root();
        let settings = Config::builder()
            .set_default("url", DEFAULT_URL)?
            .set_default("csv_path", root.join(CSV_FILE).to_string_lossy().into_owned())?
            .set_default("db_path", root.join(DB_FILE).to_string_lossy().into_owned())?
            .set_default("bind", DEFAULT_BIND)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .add_source(Environment::with_prefix("ODDS").try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Directory holding the crate manifest; the CSV and store live here.
pub fn project_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}
