//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameCommand`] values; held-key
//! repeats are left to the terminal driver.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key_event, should_quit};
