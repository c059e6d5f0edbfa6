//! Pump.fun Adapter
//!
//! Market data lookups against the pump.fun HTTP API.
//!
//! # Overview
//!
//! Pump.fun is a Solana-based platform for launching meme coins with bonding
//! curves. This adapter queries their token API for:
//! - Current market state (price, volume, liquidity, market cap, holders)
//! - Recent trades on a token
//!
//! Token lookups are cached for a short TTL because the same contract tends
//! to be pasted into the chat repeatedly while a token is being discussed.
//! Trades are always fetched live.
//!
//! # Example
//!
//! ```ignore
//! use ensoka::adapters::pump_fun::PumpFunClient;
//! use ensoka::ports::market_data::MarketDataPort;
//!
//! let client = PumpFunClient::new()?;
//! let snapshot = client.fetch_token("8Yw2QrK1mNop34vXcGHjkLi9fBdTuEzAs5R6hCtPump").await?;
//! println!("{} ({}) liquidity: ${}", snapshot.name, snapshot.symbol, snapshot.liquidity);
//! ```

mod cache;
mod client;
mod types;

pub use cache::{CacheStats, TokenCache, TokenOutcome};
pub use client::{PumpFunClient, PumpFunConfig};
pub use types::{TokenPayload, TradeEntry, TradesEnvelope};
