//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config.toml
//! structure. Every section has working defaults, so a missing or empty file
//! yields a usable configuration; secrets come from the environment.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::pump_fun::PumpFunConfig;
use crate::domain::rug_score::{
    DEFAULT_MIN_HOLDER_COUNT, DEFAULT_MIN_LIQUIDITY_USD, DEFAULT_VOLUME_LIQUIDITY_RATIO,
};
use crate::domain::whale::DEFAULT_WHALE_THRESHOLD_USD;
use crate::domain::{RugScorer, WhaleDetector};

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramSection,
    #[serde(default)]
    pub pump_fun: PumpFunSection,
    #[serde(default)]
    pub cache: CacheSection,
    #[serde(default)]
    pub analysis: AnalysisSection,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub ai: AiSection,
}

/// Telegram configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramSection {
    /// Bot token (prefer the TELEGRAM_BOT_TOKEN env var over committing this)
    #[serde(default)]
    pub bot_token: String,
}

impl TelegramSection {
    /// Get bot token with environment variable override
    /// Checks TELEGRAM_BOT_TOKEN env var first, falls back to config value
    pub fn get_bot_token(&self) -> String {
        std::env::var("TELEGRAM_BOT_TOKEN").unwrap_or_else(|_| self.bot_token.clone())
    }
}

/// Pump.fun API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct PumpFunSection {
    /// Pump.fun API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://pumpapi.fun/api".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for PumpFunSection {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Token cache configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSection {
    /// TTL for cached token lookups in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
    /// Maximum number of cached token lookups
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
}

fn default_cache_ttl_secs() -> u64 {
    60
}

fn default_cache_max_entries() -> usize {
    512
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
            max_entries: default_cache_max_entries(),
        }
    }
}

/// Analysis threshold configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSection {
    /// Liquidity below this (USD) flags high rug risk
    #[serde(default = "default_min_liquidity_usd")]
    pub min_liquidity_usd: f64,
    /// Volume above liquidity times this ratio flags a possible pump & dump
    #[serde(default = "default_volume_liquidity_ratio")]
    pub volume_liquidity_ratio: f64,
    /// Holder count below this flags centralization risk
    #[serde(default = "default_min_holder_count")]
    pub min_holder_count: u64,
    /// Trades strictly above this (USD) count as whale activity
    #[serde(default = "default_whale_threshold_usd")]
    pub whale_threshold_usd: f64,
}

fn default_min_liquidity_usd() -> f64 {
    DEFAULT_MIN_LIQUIDITY_USD
}

fn default_volume_liquidity_ratio() -> f64 {
    DEFAULT_VOLUME_LIQUIDITY_RATIO
}

fn default_min_holder_count() -> u64 {
    DEFAULT_MIN_HOLDER_COUNT
}

fn default_whale_threshold_usd() -> f64 {
    DEFAULT_WHALE_THRESHOLD_USD
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            min_liquidity_usd: default_min_liquidity_usd(),
            volume_liquidity_ratio: default_volume_liquidity_ratio(),
            min_holder_count: default_min_holder_count(),
            whale_threshold_usd: default_whale_threshold_usd(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// AI provider configuration section
///
/// Insight generation is currently switched off; the key is accepted so
/// existing deployments keep working, but nothing uses it yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiSection {
    /// AI provider API key
    #[serde(default)]
    pub api_key: Option<String>,
}

impl AiSection {
    /// Get API key with environment variable fallback
    /// Checks OPENAI_API_KEY env var if config value is empty/None
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var("OPENAI_API_KEY").ok()
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pump_fun.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "api_url cannot be empty".to_string(),
            ));
        }

        if self.pump_fun.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::ValidationError(
                "cache ttl_secs must be > 0".to_string(),
            ));
        }

        if self.cache.max_entries == 0 {
            return Err(ConfigError::ValidationError(
                "cache max_entries must be > 0".to_string(),
            ));
        }

        if self.analysis.volume_liquidity_ratio <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "volume_liquidity_ratio must be > 0, got {}",
                self.analysis.volume_liquidity_ratio
            )));
        }

        if self.analysis.min_liquidity_usd < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "min_liquidity_usd must be >= 0, got {}",
                self.analysis.min_liquidity_usd
            )));
        }

        if self.analysis.whale_threshold_usd < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "whale_threshold_usd must be >= 0, got {}",
                self.analysis.whale_threshold_usd
            )));
        }

        Ok(())
    }
}

// Conversion from Config to the component configurations

impl From<&Config> for PumpFunConfig {
    fn from(config: &Config) -> Self {
        PumpFunConfig {
            api_base_url: config.pump_fun.api_url.clone(),
            timeout: Duration::from_secs(config.pump_fun.timeout_secs),
            cache_ttl: Duration::from_secs(config.cache.ttl_secs),
            cache_max_entries: config.cache.max_entries,
        }
    }
}

impl From<&Config> for RugScorer {
    fn from(config: &Config) -> Self {
        RugScorer {
            min_liquidity_usd: config.analysis.min_liquidity_usd,
            volume_liquidity_ratio: config.analysis.volume_liquidity_ratio,
            min_holder_count: config.analysis.min_holder_count,
        }
    }
}

impl From<&Config> for WhaleDetector {
    fn from(config: &Config) -> Self {
        WhaleDetector {
            threshold_usd: config.analysis.whale_threshold_usd,
        }
    }
}
