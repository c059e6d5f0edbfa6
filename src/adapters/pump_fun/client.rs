//! Pump.fun API Client
//!
//! HTTP client for the pump.fun token API. Serves token lookups through the
//! TTL cache and fetches recent trades live on every request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;

use super::cache::{TokenCache, TokenOutcome};
use super::types::{TokenPayload, TradesEnvelope};
use crate::domain::TradeRecord;
use crate::ports::market_data::{MarketDataError, MarketDataPort, TokenSnapshot};

/// Pump.fun API client configuration
#[derive(Debug, Clone)]
pub struct PumpFunConfig {
    /// Base URL for the pump.fun API
    pub api_base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// TTL for cached token lookups
    pub cache_ttl: Duration,
    /// Maximum number of cached token lookups
    pub cache_max_entries: usize,
}

impl Default for PumpFunConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://pumpapi.fun/api".to_string(),
            timeout: Duration::from_secs(15),
            cache_ttl: TokenCache::DEFAULT_TTL,
            cache_max_entries: TokenCache::DEFAULT_MAX_ENTRIES,
        }
    }
}

/// Pump.fun market data client
#[derive(Debug)]
pub struct PumpFunClient {
    config: PumpFunConfig,
    http: Client,
    cache: Mutex<TokenCache>,
}

impl PumpFunClient {
    /// Create a new pump.fun client with default configuration
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(PumpFunConfig::default())
    }

    /// Create a new pump.fun client with custom configuration
    pub fn with_config(config: PumpFunConfig) -> Result<Self, MarketDataError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                MarketDataError::FetchFailed(format!("Failed to create HTTP client: {}", e))
            })?;
        let cache = Mutex::new(TokenCache::with_config(
            config.cache_ttl,
            config.cache_max_entries,
        ));

        Ok(Self {
            config,
            http,
            cache,
        })
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Fetch the token endpoint and decode the response body
    ///
    /// The upstream API reports failures inside the body rather than via HTTP
    /// status, so the body is decoded regardless of the status code.
    async fn request_token(&self, address: &str) -> Result<TokenOutcome, MarketDataError> {
        let url = format!("{}/token/{}", self.config.api_base_url, address);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::FetchFailed(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| MarketDataError::MalformedPayload(e.to_string()))?;

        classify_token_body(body)
    }
}

/// Classify a decoded token response body
///
/// An "error" key means the token is unknown; a missing "data" key means the
/// token exists but carries no market data yet, which yields the placeholder
/// snapshot.
fn classify_token_body(body: serde_json::Value) -> Result<TokenOutcome, MarketDataError> {
    if body.get("error").is_some() {
        return Ok(TokenOutcome::NotFound);
    }

    let payload = match body.get("data") {
        Some(data) => serde_json::from_value::<TokenPayload>(data.clone())
            .map_err(|e| MarketDataError::MalformedPayload(e.to_string()))?,
        None => TokenPayload::default(),
    };

    Ok(TokenOutcome::Found(payload.into()))
}

#[async_trait]
impl MarketDataPort for PumpFunClient {
    async fn fetch_token(&self, address: &str) -> Result<TokenSnapshot, MarketDataError> {
        {
            let cache = self.cache.lock().await;
            match cache.get(address) {
                Some(TokenOutcome::Found(snapshot)) => {
                    tracing::debug!(address, "token cache hit");
                    return Ok(snapshot.clone());
                }
                Some(TokenOutcome::NotFound) => {
                    tracing::debug!(address, "token cache hit (not found)");
                    return Err(MarketDataError::TokenNotFound);
                }
                None => {}
            }
        }

        // Transient failures propagate without touching the cache; only a
        // definitive upstream answer is stored.
        let outcome = self.request_token(address).await?;

        let mut cache = self.cache.lock().await;
        cache.insert(address.to_string(), outcome.clone());
        let stats = cache.stats();
        tracing::debug!(
            address,
            valid = stats.valid_entries,
            total = stats.total_entries,
            "token cached"
        );
        drop(cache);

        match outcome {
            TokenOutcome::Found(snapshot) => Ok(snapshot),
            TokenOutcome::NotFound => Err(MarketDataError::TokenNotFound),
        }
    }

    async fn fetch_trades(&self, address: &str) -> Result<Vec<TradeRecord>, MarketDataError> {
        let url = format!("{}/trades/{}", self.config.api_base_url, address);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::FetchFailed(e.to_string()))?;

        let envelope: TradesEnvelope = response
            .json()
            .await
            .map_err(|e| MarketDataError::MalformedPayload(e.to_string()))?;

        Ok(envelope
            .transactions
            .into_iter()
            .map(TradeRecord::from)
            .collect())
    }
}
