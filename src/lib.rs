#![allow(dead_code, unused_imports, unused_variables)]
//! Ensoka - Pump.fun Whale & Rug Tracker Telegram Bot Library
//!
//! On-demand pump.fun token analysis: rug pull heuristics, whale trade
//! alerts, and market figures, delivered over Telegram.
//!
//! # Modules
//!
//! - `domain`: Core analysis logic (RugScorer, WhaleDetector)
//! - `ports`: Trait abstractions (MarketDataPort)
//! - `adapters`: External implementations (pump.fun API, Telegram, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Analysis pipeline and report rendering

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
