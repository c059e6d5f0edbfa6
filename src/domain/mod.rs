//! Domain Layer - Core analysis logic for the Ensoka tracker bot
//!
//! This module contains pure domain types and logic with no external dependencies.
//! All external interactions happen through the ports layer.
//!
//! ## Analysis Modules
//!
//! - `rug_score`: Additive rug pull risk scoring from liquidity, volume and holders
//! - `whale`: Large-trade detection and alert rendering

pub mod rug_score;
pub mod whale;

pub use rug_score::{RiskAssessment, RiskFactor, RiskLevel, RugScorer, TokenMetrics};
pub use whale::{
    format_usd, render_alerts, TradeRecord, TradeSide, WhaleAlert, WhaleDetector,
    NO_WHALE_ACTIVITY,
};
