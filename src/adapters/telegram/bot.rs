//! Telegram Bot
//!
//! Bot lifecycle: token validation, long-poll update loop, and graceful
//! shutdown. Each inbound message is handled on its own task so a slow
//! upstream fetch never blocks the poll loop.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::UpdateKind;
use thiserror::Error;
use tokio::sync::Notify;

use super::handler;
use crate::application::TokenAnalyzer;

/// Long-poll timeout passed to getUpdates, in seconds
const POLL_TIMEOUT_SECS: u32 = 10;

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Invalid bot token: {0}")]
    InvalidToken(String),

    #[error("Telegram API error: {0}")]
    Api(#[from] teloxide::RequestError),
}

/// Telegram bot wrapper around the analysis pipeline
pub struct TelegramBot {
    bot: Bot,
    analyzer: Arc<TokenAnalyzer>,
    /// Shutdown signal
    shutdown: Arc<Notify>,
    /// Last update offset to avoid processing duplicates
    last_update_offset: Arc<AtomicI64>,
}

impl TelegramBot {
    /// Connect to Telegram, validating the token via getMe
    pub async fn connect(
        token: &str,
        analyzer: Arc<TokenAnalyzer>,
    ) -> Result<Self, TelegramError> {
        if token.is_empty() {
            return Err(TelegramError::InvalidToken("no token provided".to_string()));
        }

        let bot = Bot::new(token);
        match bot.get_me().await {
            Ok(me) => {
                tracing::info!(
                    "Bot connected: @{} (ID: {})",
                    me.username.as_deref().unwrap_or("unknown"),
                    me.id
                );
            }
            Err(e) => {
                return Err(TelegramError::InvalidToken(e.to_string()));
            }
        }

        Ok(Self {
            bot,
            analyzer,
            shutdown: Arc::new(Notify::new()),
            last_update_offset: Arc::new(AtomicI64::new(0)),
        })
    }

    /// Get the shutdown notifier
    pub fn shutdown_handle(&self) -> Arc<Notify> {
        self.shutdown.clone()
    }

    /// Poll for updates until shutdown is signalled
    pub async fn run(&self) {
        tracing::info!("update polling started");

        loop {
            tokio::select! {
                _ = self.shutdown.notified() => {
                    tracing::info!("update polling received shutdown signal");
                    break;
                }
                _ = self.poll_updates() => {
                    // Continue polling
                }
            }
        }

        tracing::info!("update polling stopped");
    }

    /// One getUpdates round: dispatch messages, advance the offset
    async fn poll_updates(&self) {
        let current_offset = self.last_update_offset.load(Ordering::SeqCst);
        let mut request = self.bot.get_updates().timeout(POLL_TIMEOUT_SECS);
        if current_offset > 0 {
            request = request.offset(current_offset as i32);
        }

        match request.await {
            Ok(updates) => {
                for update in updates {
                    // Advance offset to the next update ID to avoid reprocessing
                    self.last_update_offset
                        .store(update.id.0 as i64 + 1, Ordering::SeqCst);

                    if let UpdateKind::Message(message) = update.kind {
                        let bot = self.bot.clone();
                        let analyzer = self.analyzer.clone();
                        tokio::spawn(handler::handle_message(bot, analyzer, message));
                    }
                }
            }
            Err(e) => {
                // Log error but don't stop polling
                tracing::warn!("update poll error (will retry): {}", e);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }
}
