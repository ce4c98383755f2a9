#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use civic_rsvp::{
    civic::HttpCivicClient, config::Config, Attendee, Event, EventManager, RepresentativeService,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Record a demo RSVP and report the attendee's civic representatives.
#[derive(Debug, Parser)]
#[command(name = "civic-rsvp", version)]
struct Cli {
    /// YAML config file (defaults to ./config.yaml when present)
    #[arg(long)]
    config: Option<String>,

    /// List events and attendees without calling the civic-info endpoint
    #[arg(long)]
    skip_lookup: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Load and validate configuration first (fail-fast)
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    // Listing-only runs never touch the endpoint, so only lookups need a key
    let client = if cli.skip_lookup {
        None
    } else {
        let api_key = config
            .civic
            .require_api_key()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        Some(HttpCivicClient::new(&config.civic.base_url, api_key))
    };

    // Logs go to stderr so the report on stdout stays clean
    let filter = EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("invalid logging.level '{}'", config.logging.level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "civic-rsvp starting up");

    let date = NaiveDate::from_ymd_opt(2024, 12, 20).context("invalid event date")?;
    let event = Event::new("Political Engagement Workshop", date, "City Hall");
    let attendee = Attendee::new("Efe", "efe@example.com", "90210");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut manager = EventManager::new();
    manager
        .add_attendee(event, attendee, "confirmed")
        .write_notice(&mut out)?;
    manager.list_events(&mut out)?;
    manager.list_attendees(&mut out)?;

    if let Some(client) = client {
        let service = RepresentativeService::new(Arc::new(client));
        service
            .list_representatives_for_all(&manager, &mut out)
            .await?;
    } else {
        tracing::info!("representative lookup skipped");
    }

    out.flush()?;
    Ok(())
}
