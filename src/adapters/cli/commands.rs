//! CLI Command Definitions
//!
//! Argument parsing for the Ensoka tracker bot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ensoka - Pump.fun Whale & Rug Tracker Telegram Bot
#[derive(Parser, Debug)]
#[command(
    name = "ensoka",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Pump.fun whale & rug tracker Telegram bot",
    long_about = "Ensoka analyzes pump.fun tokens on demand: paste a contract address \
                  into the chat and get liquidity, holder and whale-trade heuristics back."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the Telegram bot
    Run(RunCmd),

    /// Analyze a single contract address and print the report
    Analyze(AnalyzeCmd),
}

/// Start the Telegram bot
#[derive(Parser, Debug)]
pub struct RunCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,
}

/// Analyze one contract address from the command line
#[derive(Parser, Debug)]
pub struct AnalyzeCmd {
    /// Pump.fun contract address to analyze
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,
}
