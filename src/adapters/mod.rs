//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - Pump.fun: token API client with TTL-cached lookups
//! - Telegram: chat front-end and long-poll update loop
//! - CLI: command-line argument parsing

pub mod cli;
pub mod pump_fun;
pub mod telegram;

pub use cli::CliApp;
pub use pump_fun::PumpFunClient;
pub use telegram::TelegramBot;
