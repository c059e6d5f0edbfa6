//! Whale Detector
//!
//! Flags large trades from a token's recent trade history. A trade above the
//! USD threshold becomes an alert line for the analysis reply; input order is
//! preserved so the reply mirrors the upstream feed.

use std::fmt;

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// Default USD amount a trade must exceed to count as whale activity
pub const DEFAULT_WHALE_THRESHOLD_USD: f64 = 5_000.0;

/// Reply line used when no trade crosses the threshold
pub const NO_WHALE_ACTIVITY: &str = "✅ **No whale activity detected.**";

/// A single trade as reported by the upstream feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Trade size in USD
    pub amount: f64,
    /// Wallet that made the trade
    pub wallet: String,
    /// Upstream trade kind tag, e.g. "buy" or "sell"
    pub kind: String,
}

/// Direction of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Map an upstream kind tag to a side. Only the exact lowercase "buy" maps
    /// to Buy; every other tag (including casing variants, unknown values, and
    /// the empty string) is treated as Sell. Sell is the alarming direction
    /// for whale tracking, so unrecognized trades stay visible as sells.
    pub fn from_kind(kind: &str) -> Self {
        if kind == "buy" {
            TradeSide::Buy
        } else {
            TradeSide::Sell
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "🟢 BUY"),
            TradeSide::Sell => write!(f, "🔴 SELL"),
        }
    }
}

/// A trade that crossed the whale threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhaleAlert {
    /// Trade size in USD
    pub amount: f64,
    /// Wallet that made the trade
    pub wallet: String,
    /// Buy or sell
    pub side: TradeSide,
}

impl fmt::Display for WhaleAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "🐋 **Whale {} Alert:** ${} by `{}`",
            self.side,
            format_usd(self.amount),
            self.wallet
        )
    }
}

/// Configuration for whale detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhaleDetector {
    /// Trades strictly above this USD amount are flagged (default: $5,000)
    pub threshold_usd: f64,
}

impl Default for WhaleDetector {
    fn default() -> Self {
        Self {
            threshold_usd: DEFAULT_WHALE_THRESHOLD_USD,
        }
    }
}

impl WhaleDetector {
    /// Create a detector with the default threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag every trade strictly above the threshold, preserving input order
    pub fn detect(&self, trades: &[TradeRecord]) -> Vec<WhaleAlert> {
        trades
            .iter()
            .filter(|t| t.amount > self.threshold_usd)
            .map(|t| WhaleAlert {
                amount: t.amount,
                wallet: t.wallet.clone(),
                side: TradeSide::from_kind(&t.kind),
            })
            .collect()
    }
}

/// Render whale alerts as reply lines, one per alert, or the no-activity line
pub fn render_alerts(alerts: &[WhaleAlert]) -> String {
    if alerts.is_empty() {
        NO_WHALE_ACTIVITY.to_string()
    } else {
        alerts
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format a USD amount with thousands separators and cents only when the
/// fractional part is non-zero: 12500.0 -> "12,500", 999.5 -> "999.50".
pub fn format_usd(value: f64) -> String {
    let total_cents = (value.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;
    let grouped = whole.to_formatted_string(&Locale::en);
    if cents > 0 {
        format!("{}.{:02}", grouped, cents)
    } else {
        grouped
    }
}
