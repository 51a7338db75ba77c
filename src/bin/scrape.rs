use std::time::Instant;

use clap::Parser;
use odds_scraper::{csv, fetch, Page, Record, Settings};

#[derive(Parser)]
#[command(
    name = "scrape",
    version,
    about = "Scrape \"odds\" sections and wikitables from the sports betting page into a CSV"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    odds_scraper::init_tracing();
    Cli::parse();
    let settings = Settings::load()?;

    let t0 = Instant::now();
    println!("Fetching {}", settings.url);
    let html = fetch::fetch_page(&settings.url, settings.timeout()).await?;

    let page = Page::parse(&html);
    let records: Vec<Record> = page.records().collect();
    let written = csv::write_records(&settings.csv_path, &records)?;

    println!(
        "Wrote {} with {} rows in {:.1}s",
        settings.csv_path.display(),
        written,
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
