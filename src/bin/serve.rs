use clap::Parser;
use odds_scraper::{server, Settings};

#[derive(Parser)]
#[command(
    name = "serve",
    version,
    about = "Serve the stored entries as an HTML listing and at /api/entries"
)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    odds_scraper::init_tracing();
    Cli::parse();
    let settings = Settings::load()?;

    server::start_server(&settings.bind, settings.db_path).await?;
    Ok(())
}
