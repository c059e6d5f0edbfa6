//! Pump.fun Types
//!
//! Data types for pump.fun HTTP API payloads. Upstream omits fields freely,
//! so every field carries a lenient default instead of failing the parse.

use serde::{Deserialize, Serialize};

use crate::domain::TradeRecord;
use crate::ports::market_data::TokenSnapshot;

fn default_name() -> String {
    "Unknown".to_string()
}

fn default_symbol() -> String {
    "N/A".to_string()
}

fn default_wallet() -> String {
    "Unknown Wallet".to_string()
}

/// Token market data from the `data` object of a token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Token name
    #[serde(default = "default_name")]
    pub name: String,
    /// Token symbol
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Price in USD
    #[serde(default)]
    pub price: f64,
    /// 24h trading volume in USD
    #[serde(default)]
    pub volume_24h: f64,
    /// Pooled liquidity in USD
    #[serde(default)]
    pub liquidity: f64,
    /// Market capitalization in USD
    #[serde(default)]
    pub market_cap: f64,
    /// Number of distinct holders
    #[serde(default)]
    pub holders: u64,
}

impl Default for TokenPayload {
    fn default() -> Self {
        Self {
            name: default_name(),
            symbol: default_symbol(),
            price: 0.0,
            volume_24h: 0.0,
            liquidity: 0.0,
            market_cap: 0.0,
            holders: 0,
        }
    }
}

impl From<TokenPayload> for TokenSnapshot {
    fn from(payload: TokenPayload) -> Self {
        TokenSnapshot {
            name: payload.name,
            symbol: payload.symbol,
            price: payload.price,
            volume_24h: payload.volume_24h,
            liquidity: payload.liquidity,
            market_cap: payload.market_cap,
            holders: payload.holders,
        }
    }
}

/// Single trade from the trades response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeEntry {
    /// Trade size in USD
    #[serde(default)]
    pub amount: f64,
    /// Wallet that made the trade
    #[serde(default = "default_wallet")]
    pub wallet: String,
    /// "buy" or "sell" as tagged upstream
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl From<TradeEntry> for TradeRecord {
    fn from(entry: TradeEntry) -> Self {
        TradeRecord {
            amount: entry.amount,
            wallet: entry.wallet,
            kind: entry.kind,
        }
    }
}

/// Envelope of the trades endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TradesEnvelope {
    /// Recent trades, newest ordering as reported upstream
    #[serde(default)]
    pub transactions: Vec<TradeEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_token_payload() {
        let json = r#"{
            "name": "Test Meme",
            "symbol": "MEME",
            "price": 0.00042,
            "volume_24h": 150000.0,
            "liquidity": 30000.0,
            "market_cap": 420000.0,
            "holders": 310
        }"#;

        let payload: TokenPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.name, "Test Meme");
        assert_eq!(payload.symbol, "MEME");
        assert!((payload.price - 0.00042).abs() < 1e-9);
        assert_eq!(payload.holders, 310);
    }

    #[test]
    fn test_parse_sparse_token_payload_uses_defaults() {
        let json = r#"{"price": 0.01}"#;

        let payload: TokenPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.name, "Unknown");
        assert_eq!(payload.symbol, "N/A");
        assert!((payload.price - 0.01).abs() < 1e-9);
        assert_eq!(payload.volume_24h, 0.0);
        assert_eq!(payload.liquidity, 0.0);
        assert_eq!(payload.market_cap, 0.0);
        assert_eq!(payload.holders, 0);
    }

    #[test]
    fn test_empty_object_matches_default() {
        let parsed: TokenPayload = serde_json::from_str("{}").unwrap();
        let default = TokenPayload::default();

        assert_eq!(parsed.name, default.name);
        assert_eq!(parsed.symbol, default.symbol);
        assert_eq!(parsed.holders, default.holders);
    }

    #[test]
    fn test_payload_to_snapshot() {
        let payload = TokenPayload {
            name: "Test".to_string(),
            symbol: "TST".to_string(),
            price: 1.5,
            volume_24h: 100.0,
            liquidity: 200.0,
            market_cap: 300.0,
            holders: 42,
        };

        let snapshot: TokenSnapshot = payload.into();
        assert_eq!(snapshot.name, "Test");
        assert_eq!(snapshot.holders, 42);
    }

    #[test]
    fn test_parse_trade_entry() {
        let json = r#"{
            "amount": 6000.0,
            "wallet": "GvW9k2Lx",
            "type": "buy"
        }"#;

        let entry: TradeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.wallet, "GvW9k2Lx");
        assert_eq!(entry.kind, "buy");
    }

    #[test]
    fn test_parse_trade_entry_missing_fields() {
        let entry: TradeEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry.amount, 0.0);
        assert_eq!(entry.wallet, "Unknown Wallet");
        assert_eq!(entry.kind, "");
    }

    #[test]
    fn test_parse_trades_envelope() {
        let json = r#"{
            "transactions": [
                {"amount": 6000.0, "wallet": "A", "type": "buy"},
                {"amount": 100.0, "wallet": "B", "type": "sell"}
            ]
        }"#;

        let envelope: TradesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.transactions.len(), 2);
        assert_eq!(envelope.transactions[0].wallet, "A");
    }

    #[test]
    fn test_parse_trades_envelope_missing_list() {
        let envelope: TradesEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.transactions.is_empty());
    }
}
