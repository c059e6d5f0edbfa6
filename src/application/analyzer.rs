//! Token Analyzer
//!
//! On-demand analysis pipeline for a contract address pasted into the chat.
//! Key behavior:
//! - Rejects short addresses before any network traffic
//! - Fetches the token snapshot and recent trades concurrently
//! - Scores rug pull risk and flags whale trades
//! - Maps every failure to the exact reply line the chat expects

use std::sync::Arc;

use thiserror::Error;

use crate::application::report::AnalysisReport;
use crate::domain::{RugScorer, WhaleDetector};
use crate::ports::market_data::{MarketDataError, MarketDataPort};

/// Minimum number of characters for a plausible contract address
pub const MIN_ADDRESS_LENGTH: usize = 30;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Input is too short to be a contract address
    #[error("Invalid contract address")]
    InvalidAddress,

    /// Upstream does not know the token
    #[error("Token not found or invalid contract")]
    NotFound,

    /// Fetch or decode failed
    #[error(transparent)]
    Fetch(MarketDataError),
}

impl From<MarketDataError> for AnalyzeError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::TokenNotFound => AnalyzeError::NotFound,
            other => AnalyzeError::Fetch(other),
        }
    }
}

impl AnalyzeError {
    /// Markdown reply line for this error, exactly as the chat renders it
    pub fn reply_text(&self) -> String {
        match self {
            AnalyzeError::InvalidAddress => {
                "⚠️ **Invalid contract address!** Please provide a valid Pump.fun contract."
                    .to_string()
            }
            AnalyzeError::NotFound => "⚠️ **Token not found or invalid contract.**".to_string(),
            AnalyzeError::Fetch(err) => {
                format!("⚠️ **Error fetching token data:** `{}`", err)
            }
        }
    }
}

/// On-demand token analysis pipeline
pub struct TokenAnalyzer {
    market_data: Arc<dyn MarketDataPort>,
    scorer: RugScorer,
    whales: WhaleDetector,
}

impl TokenAnalyzer {
    /// Create an analyzer with default scoring thresholds
    pub fn new(market_data: Arc<dyn MarketDataPort>) -> Self {
        Self::with_components(market_data, RugScorer::default(), WhaleDetector::default())
    }

    /// Create an analyzer with custom scoring components
    pub fn with_components(
        market_data: Arc<dyn MarketDataPort>,
        scorer: RugScorer,
        whales: WhaleDetector,
    ) -> Self {
        Self {
            market_data,
            scorer,
            whales,
        }
    }

    /// Analyze a contract address end to end
    ///
    /// The address is trimmed first; anything shorter than
    /// [`MIN_ADDRESS_LENGTH`] characters is rejected before any fetch. Both
    /// upstream fetches run concurrently and the first failure wins.
    pub async fn analyze(&self, address: &str) -> Result<AnalysisReport, AnalyzeError> {
        let address = address.trim();
        if address.chars().count() < MIN_ADDRESS_LENGTH {
            return Err(AnalyzeError::InvalidAddress);
        }

        tracing::info!(address, "analyzing token");

        let (snapshot, trades) = tokio::try_join!(
            self.market_data.fetch_token(address),
            self.market_data.fetch_trades(address),
        )?;

        let risk = self.scorer.assess(&snapshot.metrics());
        let whales = self.whales.detect(&trades);

        tracing::debug!(
            address,
            score = risk.score,
            whale_count = whales.len(),
            "analysis complete"
        );

        Ok(AnalysisReport::new(snapshot, risk, whales))
    }
}
