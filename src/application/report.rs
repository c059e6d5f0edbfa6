//! Analysis Report
//!
//! Aggregated analysis result and its Markdown rendering for the chat reply.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{format_usd, render_alerts, RiskAssessment, WhaleAlert};
use crate::ports::market_data::TokenSnapshot;

/// Placeholder shown while AI insight generation is switched off
pub const AI_INSIGHT_PLACEHOLDER: &str = "Not Available";

/// Full analysis result for one contract address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Market snapshot the analysis ran against
    pub snapshot: TokenSnapshot,
    /// Rug pull risk assessment
    pub risk: RiskAssessment,
    /// Whale alerts in trade order
    pub whales: Vec<WhaleAlert>,
    /// When the analysis ran
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(snapshot: TokenSnapshot, risk: RiskAssessment, whales: Vec<WhaleAlert>) -> Self {
        Self {
            snapshot,
            risk,
            whales,
            generated_at: Utc::now(),
        }
    }

    /// Render the Markdown reply block
    ///
    /// Money figures are thousands-separated; price and holder count render
    /// as-is. The AI insight line stays a fixed placeholder.
    pub fn render(&self) -> String {
        format!(
            "🟢 **Token Analysis - {name} ({symbol})** 🟢\n\n\
             💰 **Price:** `${price}`\n\
             📊 **24h Volume:** `${volume}`\n\
             🔄 **Liquidity:** `${liquidity}`\n\
             🌍 **Market Cap:** `${market_cap}`\n\
             👥 **Holders:** `{holders}`\n\n\
             🔥 **Rug Pull Risk:**\n{risk}\n\n\
             🐋 **Whale Activity:**\n{whales}\n\n\
             📈 **AI Market Insight:**\n_{insight}_",
            name = self.snapshot.name,
            symbol = self.snapshot.symbol,
            price = self.snapshot.price,
            volume = format_usd(self.snapshot.volume_24h),
            liquidity = format_usd(self.snapshot.liquidity),
            market_cap = format_usd(self.snapshot.market_cap),
            holders = self.snapshot.holders,
            risk = self.risk.summary(),
            whales = render_alerts(&self.whales),
            insight = AI_INSIGHT_PLACEHOLDER,
        )
    }
}
