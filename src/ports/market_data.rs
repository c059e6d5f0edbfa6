use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{TokenMetrics, TradeRecord};

/// Market data error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Upstream reported the token as unknown or the contract as invalid
    #[error("Token not found or invalid contract")]
    TokenNotFound,

    /// The request could not be completed (connect, timeout, transport)
    #[error("Request failed: {0}")]
    FetchFailed(String),

    /// The response body did not match the expected shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Market snapshot for a single token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub name: String,
    pub symbol: String,
    /// Price in USD, as reported upstream
    pub price: f64,
    /// Trading volume over the last 24h in USD
    pub volume_24h: f64,
    /// Pooled liquidity in USD
    pub liquidity: f64,
    /// Market capitalization in USD
    pub market_cap: f64,
    /// Number of distinct holders
    pub holders: u64,
}

impl TokenSnapshot {
    /// Project the snapshot onto the metrics used for rug pull scoring
    pub fn metrics(&self) -> TokenMetrics {
        TokenMetrics {
            liquidity: self.liquidity,
            volume_24h: self.volume_24h,
            holders: self.holders,
        }
    }
}

/// Market data port trait
///
/// Implementations fetch token market state and recent trades for a contract
/// address. Callers must be able to issue both fetches concurrently.
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Fetch the current market snapshot for a token
    async fn fetch_token(&self, address: &str) -> Result<TokenSnapshot, MarketDataError>;

    /// Fetch recent trades for a token, newest ordering as reported upstream
    async fn fetch_trades(&self, address: &str) -> Result<Vec<TradeRecord>, MarketDataError>;
}
