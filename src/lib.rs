//! Digital Wallet - terminal home screen for a digital wallet
//!
//! Renders a single screen: a toolbar, the balance, the latest transactions
//! grouped by date under sticky headers, and a bottom action bar. The data
//! comes from a pluggable source and none of the controls do anything yet.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Amounts, glyphs, transactions and their date grouping
//! - `fixtures`: Transaction sources (built-in sample, JSON fixture files)
//! - `actions`: The on-screen controls and their inert implementation
//! - `display`: Plain-text formatting for CLI output
//! - `tui`: The ratatui home screen
//!
//! # Example
//!
//! ```rust
//! use digital_wallet::fixtures::SampleData;
//! use digital_wallet::tui::snapshot::render_text;
//!
//! let screen = render_text(&SampleData, 60, 40);
//! assert!(screen.contains("Digital Wallet"));
//! ```

pub mod actions;
pub mod config;
pub mod display;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::WalletError;
