//! Telegram Adapter
//!
//! Chat front-end for the analysis pipeline. A manual getUpdates long-poll
//! loop dispatches each inbound message to its own task; replies are sent
//! back as Markdown.

mod bot;
mod handler;

pub use bot::{TelegramBot, TelegramError};
pub use handler::{dispatch, handle_message, WELCOME_MESSAGE};
