//! Terminal "map renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It renders into a simple framebuffer that is diffed and flushed to the
//! terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout (map rows, status line) pure and unit-testable
//! - Only touch the terminal in [`renderer`]

pub mod fb;
pub mod map_view;
pub mod renderer;

pub use tui_rooms_core as core;
pub use tui_rooms_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use map_view::{MapView, TermSize};
pub use renderer::{encode_frame, TerminalRenderer};
