use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::TradeRecord;
use crate::ports::market_data::{MarketDataError, MarketDataPort, TokenSnapshot};

/// Mock market data port that records calls and allows controlled responses
///
/// Calls are recorded as "token:{address}" and "trades:{address}" so tests can
/// assert both which endpoints were hit and how often.
#[derive(Debug, Default)]
pub struct MockMarketData {
    calls: Arc<Mutex<Vec<String>>>,
    tokens: Arc<Mutex<HashMap<String, Result<TokenSnapshot, MarketDataError>>>>,
    trades: Arc<Mutex<HashMap<String, Vec<TradeRecord>>>>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the snapshot returned for an address
    pub fn with_token(self, address: &str, snapshot: TokenSnapshot) -> Self {
        self.tokens
            .lock()
            .unwrap()
            .insert(address.to_string(), Ok(snapshot));
        self
    }

    /// Builder method to set the error returned for an address
    pub fn with_token_error(self, address: &str, error: MarketDataError) -> Self {
        self.tokens
            .lock()
            .unwrap()
            .insert(address.to_string(), Err(error));
        self
    }

    /// Builder method to set the trades returned for an address
    pub fn with_trades(self, address: &str, trades: Vec<TradeRecord>) -> Self {
        self.trades
            .lock()
            .unwrap()
            .insert(address.to_string(), trades);
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataPort for MockMarketData {
    async fn fetch_token(&self, address: &str) -> Result<TokenSnapshot, MarketDataError> {
        self.calls.lock().unwrap().push(format!("token:{address}"));
        self.tokens
            .lock()
            .unwrap()
            .get(address)
            .cloned()
            .unwrap_or_else(|| {
                Err(MarketDataError::FetchFailed(
                    "no response configured".to_string(),
                ))
            })
    }

    async fn fetch_trades(&self, address: &str) -> Result<Vec<TradeRecord>, MarketDataError> {
        self.calls.lock().unwrap().push(format!("trades:{address}"));
        // Unconfigured trades default to an empty list so happy-path tests
        // only need to stage the snapshot.
        Ok(self
            .trades
            .lock()
            .unwrap()
            .get(address)
            .cloned()
            .unwrap_or_default())
    }
}
