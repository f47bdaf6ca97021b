//! TUI Rooms (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_rooms::{core,input,term,types}` and
//! adds the pieces that tie them into a program: configuration, the event log
//! and the input loop.

pub use tui_rooms_core as core;
pub use tui_rooms_input as input;
pub use tui_rooms_term as term;
pub use tui_rooms_types as types;

pub mod app;
pub mod config;
pub mod event_log;
