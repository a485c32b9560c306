use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;

use coal_reports::config::Settings;
use coal_reports::domain::date::{DateRange, ReportDate};
use coal_reports::domain::identifiers::TableId;
use coal_reports::store::{fixture, InMemoryStore};
use coal_reports::ReportService;

/// Render month-to-date report rows for one table and date window
#[derive(Parser, Debug)]
#[command(name = "coal-reports", version, about)]
struct Cli {
    /// Reporting table identifier
    #[arg(long)]
    table: i64,

    /// First day of the requested window (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    from: NaiveDate,

    /// Last day of the requested window (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    to: NaiveDate,

    /// JSON file with raw day rows to load
    #[arg(long)]
    rows: PathBuf,
}

fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    raw.parse()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = Settings::new()?;

    let store = Arc::new(InMemoryStore::new());
    let loaded = fixture::load_rows(&cli.rows, &store)?;
    info!(loaded, "loaded day rows");

    let window = DateRange::new(ReportDate::from(cli.from), ReportDate::from(cli.to))?;
    let service = ReportService::from_settings(store, &settings)?;
    let rows = service.month_to_date(TableId::from(cli.table), window).await?;

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
