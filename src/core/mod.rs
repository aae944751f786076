//! # Core Application Logic
//!
//! Parsing and the filter/navigation engine. Nothing in here knows about
//! ratatui or crossterm.
//!
//! ```text
//!   show-keys text
//!         │
//!         ▼
//!   ┌────────────┐      ┌──────────────────────────┐
//!   │   parser   │ ───▶ │  state (ViewState)       │ ◀── action::update()
//!   │  (pure)    │      │  • scope + fuzzy query   │
//!   └────────────┘      │  • cursor / viewport     │
//!                       └────────────┬─────────────┘
//!                                    ▼
//!                              TUI adapter
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: `wezterm show-keys` text → `ParseResult`
//! - [`state`]: `ViewState`, the engine the view renders from
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`fuzzy`]: subsequence matching with scores and positions
//! - [`config`]: `~/.wkv/config.toml` and override resolution
//! - [`source`]: running `wezterm show-keys` or reading a saved dump

pub mod action;
pub mod config;
pub mod fuzzy;
pub mod parser;
pub mod source;
pub mod state;
