//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into [`crate::types::Command`], one command per event.

pub mod keys;

pub use tui_rooms_types as types;

pub use keys::{command_for_event, handle_key_event, should_quit};
