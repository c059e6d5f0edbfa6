//! Ensoka - Pump.fun Whale & Rug Tracker Telegram Bot
//!
//! On-demand token analysis for pump.fun contracts: rug pull heuristics,
//! whale trade alerts, and market figures, delivered over Telegram.

mod adapters;
mod application;
mod config;
mod domain;
mod ports;

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapters::cli::{AnalyzeCmd, CliApp, Command, RunCmd};
use crate::adapters::pump_fun::{PumpFunClient, PumpFunConfig};
use crate::adapters::telegram::TelegramBot;
use crate::application::TokenAnalyzer;
use crate::config::{load_config, Config};
use crate::domain::{RugScorer, WhaleDetector};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (secrets go here, not in config.toml)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();

    match app.command {
        Command::Run(cmd) => run_command(cmd, app.verbose, app.debug).await,
        Command::Analyze(cmd) => analyze_command(cmd, app.verbose, app.debug).await,
    }
}

/// Initialize logging from CLI flags, RUST_LOG, then the configured level
fn init_logging(verbose: bool, debug: bool, config_level: &str) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
    };

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

/// Load configuration, falling back to defaults when the file does not exist
///
/// Returns whether the file was actually read so the caller can log the
/// fallback after logging is up.
fn load_or_default(path: &Path) -> Result<(Config, bool)> {
    if path.exists() {
        let config = load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
        Ok((config, true))
    } else {
        Ok((Config::default(), false))
    }
}

/// Build the analysis pipeline from configuration
fn build_analyzer(config: &Config) -> Result<TokenAnalyzer> {
    let client =
        PumpFunClient::with_config(PumpFunConfig::from(config))
            .context("Failed to create pump.fun client")?;

    Ok(TokenAnalyzer::with_components(
        Arc::new(client),
        RugScorer::from(config),
        WhaleDetector::from(config),
    ))
}

async fn run_command(cmd: RunCmd, verbose: bool, debug: bool) -> Result<()> {
    let (config, loaded) = load_or_default(&cmd.config)?;
    init_logging(verbose, debug, &config.logging.level)?;

    tracing::info!("Starting Ensoka tracker bot...");
    if !loaded {
        tracing::warn!(
            "Config file not found at '{}' - using defaults",
            cmd.config.display()
        );
    }

    if config.ai.get_api_key().is_some() {
        tracing::debug!("AI provider key configured; insight generation is currently disabled");
    }

    let token = config.telegram.get_bot_token();
    if token.is_empty() {
        bail!(
            "No Telegram bot token configured.\n\n\
             Set the TELEGRAM_BOT_TOKEN environment variable (e.g. in a .env file),\n\
             or set telegram.bot_token in {}.\n\n\
             Tokens are issued by @BotFather on Telegram.",
            cmd.config.display()
        );
    }

    let analyzer = Arc::new(build_analyzer(&config)?);
    let bot = TelegramBot::connect(&token, analyzer)
        .await
        .context("Failed to connect to Telegram")?;

    // Setup Ctrl+C handler
    let shutdown = bot.shutdown_handle();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutdown signal received");
        shutdown.notify_waiters();
    });

    bot.run().await;
    tracing::info!("Ensoka stopped");
    Ok(())
}

async fn analyze_command(cmd: AnalyzeCmd, verbose: bool, debug: bool) -> Result<()> {
    let (config, loaded) = load_or_default(&cmd.config)?;
    init_logging(verbose, debug, &config.logging.level)?;

    if !loaded {
        tracing::debug!(
            "Config file not found at '{}' - using defaults",
            cmd.config.display()
        );
    }

    let analyzer = build_analyzer(&config)?;

    match analyzer.analyze(&cmd.address).await {
        Ok(report) => {
            println!("{}", report.render());
            Ok(())
        }
        Err(e) => bail!("{}", e.reply_text()),
    }
}
