use std::process::ExitCode;

use clap::Parser;
use odds_scraper::{loader, Error, Settings};
use tracing::error;

#[derive(Parser)]
#[command(
    name = "load",
    version,
    about = "Rebuild the SQLite store from the scraped CSV (drops any existing store)"
)]
struct Cli {}

fn main() -> anyhow::Result<ExitCode> {
    odds_scraper::init_tracing();
    Cli::parse();
    let settings = Settings::load()?;

    match loader::load(&settings.csv_path, &settings.db_path) {
        Ok(inserted) => {
            println!("Wrote {} with {} rows", settings.db_path.display(), inserted);
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::MissingInput(path)) => {
            error!("CSV not found: {}", path.display());
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e.into()),
    }
}
