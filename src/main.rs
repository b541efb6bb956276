use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use beca_cli::config::settings::{BASE_URL_VAR, MODEL_VAR};
use beca_cli::config::Settings;
use beca_cli::display::format_summary;
use beca_cli::ledger::Ledger;
use beca_cli::logging::{init_tracing, DEFAULT_LEVEL};
use beca_cli::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "beca",
    author = "Kaylee Beyene",
    version,
    about = "Terminal dashboard for a student grant budget",
    long_about = "Beca tracks spending against the categories of a student grant \
                  (TU BECA) and can ask Gemini for a short review of the budget. \
                  Set BECA_API_KEY (or GEMINI_API_KEY) to enable AI advice."
)]
struct Cli {
    /// Model used for AI advice
    #[arg(long, env = MODEL_VAR)]
    model: Option<String>,

    /// Base URL of the generative language API
    #[arg(long, env = BASE_URL_VAR)]
    api_base_url: Option<String>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, env = "BECA_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = DEFAULT_LEVEL)]
    log_level: String,

    /// Print a plain-text summary instead of starting the dashboard
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref(), &cli.log_level)?;

    let mut settings = Settings::from_env()?;
    if let Some(model) = cli.model {
        settings.advisor.model = model;
    }
    if let Some(url) = cli.api_base_url {
        settings.advisor.base_url = url.trim_end_matches('/').to_string();
    }

    let ledger = Ledger::seeded()?;
    info!(
        categories = ledger.categories().len(),
        transactions = ledger.transactions().len(),
        "ledger loaded"
    );

    if cli.summary {
        print!("{}", format_summary(&ledger));
        return Ok(());
    }

    run_tui(ledger, &settings)
}
