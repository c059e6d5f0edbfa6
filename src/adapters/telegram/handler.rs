//! Message Handling
//!
//! Routes inbound chat text: `/start` gets the fixed welcome message, any
//! other command is ignored, and everything else is treated as a contract
//! address and analyzed.

use teloxide::prelude::*;
use teloxide::types::{Message, ParseMode};

use crate::application::TokenAnalyzer;

/// Welcome message sent in response to /start
pub const WELCOME_MESSAGE: &str = "🚀 **Welcome to Ensoka - Pump.fun Whale & Rug Tracker!**\n\n\
    🔹 Send a **Pump.fun contract address**, and I'll analyze:\n\
    ✅ **Whale Activity** (Large Buy/Sell Alerts)\n\
    ✅ **Rug Pull Risk Analysis**\n\
    ✅ **Liquidity & Trading Volume**\n\
    ✅ **AI-Powered Market Insights**";

/// Compute the reply for one inbound text, if any
///
/// `/start` (with or without a bot-name suffix) gets the welcome message.
/// Other commands are ignored so the bot stays quiet in group chats. Plain
/// text is treated as a contract address; analysis failures reply with their
/// user-facing error line rather than propagating.
pub async fn dispatch(analyzer: &TokenAnalyzer, text: &str) -> Option<String> {
    let text = text.trim();

    if let Some(command) = text.strip_prefix('/') {
        let name = command.split_whitespace().next().unwrap_or("");
        if name == "start" || name.starts_with("start@") {
            return Some(WELCOME_MESSAGE.to_string());
        }
        return None;
    }

    match analyzer.analyze(text).await {
        Ok(report) => Some(report.render()),
        Err(err) => Some(err.reply_text()),
    }
}

/// Handle one inbound message end to end
pub async fn handle_message(bot: Bot, analyzer: std::sync::Arc<TokenAnalyzer>, message: Message) {
    let Some(text) = message.text() else {
        return;
    };

    let Some(reply) = dispatch(&analyzer, text).await else {
        return;
    };

    if let Err(e) = bot
        .send_message(message.chat.id, reply)
        .parse_mode(ParseMode::Markdown)
        .await
    {
        tracing::warn!(chat_id = message.chat.id.0, "failed to send reply: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ports::market_data::TokenSnapshot;
    use crate::ports::mocks::MockMarketData;

    const ADDR: &str = "8Yw2QrK1mNop34vXcGHjkLi9fBdTuEzAs5R6hCtPump";

    fn create_analyzer(mock: MockMarketData) -> TokenAnalyzer {
        TokenAnalyzer::new(Arc::new(mock))
    }

    fn create_snapshot() -> TokenSnapshot {
        TokenSnapshot {
            name: "Test Meme".to_string(),
            symbol: "MEME".to_string(),
            price: 0.00042,
            volume_24h: 150_000.0,
            liquidity: 30_000.0,
            market_cap: 420_000.0,
            holders: 310,
        }
    }

    #[tokio::test]
    async fn test_start_command_returns_welcome() {
        let analyzer = create_analyzer(MockMarketData::new());

        let reply = dispatch(&analyzer, "/start").await;
        assert_eq!(reply.as_deref(), Some(WELCOME_MESSAGE));
    }

    #[tokio::test]
    async fn test_start_with_bot_suffix_returns_welcome() {
        let analyzer = create_analyzer(MockMarketData::new());

        let reply = dispatch(&analyzer, "/start@ensoka_bot").await;
        assert_eq!(reply.as_deref(), Some(WELCOME_MESSAGE));
    }

    #[tokio::test]
    async fn test_other_commands_are_ignored() {
        let analyzer = create_analyzer(MockMarketData::new());

        assert!(dispatch(&analyzer, "/help").await.is_none());
        assert!(dispatch(&analyzer, "/stop now").await.is_none());
    }

    #[tokio::test]
    async fn test_short_text_gets_invalid_address_reply() {
        let analyzer = create_analyzer(MockMarketData::new());

        let reply = dispatch(&analyzer, "hello").await;
        assert_eq!(
            reply.as_deref(),
            Some("⚠️ **Invalid contract address!** Please provide a valid Pump.fun contract.")
        );
    }

    #[tokio::test]
    async fn test_address_gets_analysis_reply() {
        let mock = MockMarketData::new()
            .with_token(ADDR, create_snapshot())
            .with_trades(ADDR, vec![]);
        let analyzer = create_analyzer(mock);

        let reply = dispatch(&analyzer, ADDR).await.unwrap();
        assert!(reply.starts_with("🟢 **Token Analysis - Test Meme (MEME)** 🟢"));
    }
}
