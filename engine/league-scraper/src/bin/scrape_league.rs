use anyhow::Result;
use league_scraper::{JsonDirWriter, LeagueScraper, ScraperConfig};
use page_navigator::{BrowserNavigator, NavigatorConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting league scraper...");

    let config = ScraperConfig::from_env();
    let writer = JsonDirWriter::new(&config.output_dir);

    let navigator = BrowserNavigator::new(NavigatorConfig::from_env())?;
    let scraper = LeagueScraper::new(navigator, config);

    let summary = scraper.run(&writer).await?;

    println!("\nScrape complete:");
    println!("- Teams written: {}", summary.teams);
    println!("- Players collected: {}", summary.players);
    println!("- Duration: {}s", (summary.finished_at - summary.started_at).num_seconds());
    for path in &summary.written {
        println!("  {}", path.display());
    }

    info!("Scraping completed successfully!");
    Ok(())
}
