//! Interactive entry point for the bulletin export.
//!
//! Prompts for the date range, the countries to cover, and the output
//! path, then streams the scraped records into the CSV file.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use inquire::{validator::Validation, Confirm, MultiSelect, Text};
use tracing::info;

use bid_scraper::domain::constants::dates::DATE_FORMAT;
use bid_scraper::infrastructure::config::{defaults, AppConfig};
use bid_scraper::infrastructure::logging::init_logging_with_config;
use bid_scraper::{
    player_stream, BidClient, CsvExporter, ExportPlan, HttpClient, HttpClientConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::default();
    init_logging_with_config(&config.logging)?;

    let http = HttpClient::with_config(HttpClientConfig::from_app_config(&config))?;
    let client = BidClient::with_base_url(http, &config.base_url)?;

    let session = client
        .acquire_session()
        .await
        .context("failed to establish a session")?;

    let mut countries = client
        .fetch_countries()
        .await
        .context("failed to load the country list")?;

    if Confirm::new("Customize countries?")
        .with_default(false)
        .prompt()?
    {
        countries = MultiSelect::new("Countries", countries).prompt()?;
    }

    let today = Local::now().date_naive();
    let yesterday = today.pred_opt().unwrap_or(today);

    let start = prompt_date("Start Date", yesterday)?;
    let end = prompt_date("End Date", today)?;

    let output = Text::new("Output file")
        .with_default(defaults::OUTPUT_FILE)
        .prompt()?;

    let plan = ExportPlan::new(start, end, countries)?;

    let mut exporter = CsvExporter::create(&output)
        .with_context(|| format!("failed to create output file {}", output))?;

    let players = player_stream(&client, client.extractor(), &session, &plan);
    let written = exporter.write_stream(players).await?;
    exporter.finish()?;

    info!("Exported {} player(s) to {}", written, output);

    loop {
        if Confirm::new("Done! Exit?").with_default(true).prompt()? {
            return Ok(());
        }
    }
}

fn prompt_date(message: &str, default: NaiveDate) -> Result<NaiveDate> {
    let default_text = default.format(DATE_FORMAT).to_string();

    let input = Text::new(message)
        .with_default(&default_text)
        .with_validator(
            |input: &str| match NaiveDate::parse_from_str(input, DATE_FORMAT) {
                Ok(_) => Ok(Validation::Valid),
                Err(_) => Ok(Validation::Invalid("Invalid date. Format: 29/04/2021".into())),
            },
        )
        .prompt()?;

    NaiveDate::parse_from_str(&input, DATE_FORMAT)
        .with_context(|| format!("failed to parse date '{}'", input))
}
