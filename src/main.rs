use clap::Parser;
use jobscout::domain::model::{FetchStatus, SearchRequest};
use jobscout::utils::{logger, validation::Validate};
use jobscout::{export, CliConfig, FetchSettings, MatchTables, SearchEngine};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting jobscout");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let tables = match &config.tables {
        Some(path) => match MatchTables::from_path(path) {
            Ok(tables) => tables,
            Err(e) => {
                tracing::error!("Failed to load tables from {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => MatchTables::builtin(),
    };

    let settings = FetchSettings::with_timeout(Duration::from_secs(config.timeout_seconds));
    let backoff = Duration::from_millis(config.backoff_ms);
    let engine = SearchEngine::with_sites(
        tables,
        settings,
        backoff,
        &config.weworkremotely_url,
        &config.remoteok_url,
    )?;

    let request = SearchRequest {
        position: config.position.clone(),
        preferred_countries: config.countries.clone(),
        min_score: config.min_score,
    };

    let outcome = engine.search(&request).await;

    println!(
        "Skills identified: {}",
        outcome
            .skills
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );

    for report in &outcome.reports {
        match &report.status {
            FetchStatus::Success => {
                println!("✅ Found {} jobs on {}", report.jobs_found, report.source)
            }
            FetchStatus::HttpStatus(code) => {
                println!("⚠️ {} returned status code: {}", report.source, code)
            }
            FetchStatus::Failed(message) => {
                println!("❌ {} scraping failed: {}", report.source, message)
            }
        }
    }

    if outcome.jobs.is_empty() {
        println!("No matching jobs found. Try adjusting your search criteria.");
        return Ok(());
    }

    println!("\nFound {} matching jobs\n", outcome.jobs.len());
    print!("{}", export::render_table(&outcome.jobs));

    if let Some(path) = &config.csv {
        export::write_csv(path, &outcome.jobs)?;
        println!("\n📁 Results saved to: {}", path);
    }

    Ok(())
}
