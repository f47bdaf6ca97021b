//! Core map logic module - pure, deterministic, and testable
//!
//! This module contains the map model, room generation and the camera/collision
//! rules. It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces an identical map
//! - **Testable**: Every rule can be exercised without a terminal
//! - **Portable**: Can run headless, in benchmarks, or behind any renderer
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size map of cells with clipped rectangle fills
//! - [`rng`]: small seeded LCG shared by the whole session
//! - [`rooms`]: walled rooms with one door, stamped blindly onto the grid
//! - [`camera`]: viewport offsets, glyph rendering and player collision
//! - [`session`]: one-command-per-tick state machine and status line
//!
//! # Example
//!
//! ```
//! use tui_rooms_core::{Grid, Session, Tick};
//! use tui_rooms_types::{Command, Terrain};
//!
//! // An open 5x5 map with a 3x3 window centred on the player
//! let mut session = Session::from_grid(Grid::new(5, 5, Terrain::Floor), 3, 3);
//!
//! assert!(matches!(session.apply(Command::MoveRight), Tick::Continue(Some(_))));
//! assert_eq!(session.apply(Command::Quit), Tick::Quit);
//! ```

pub mod camera;
pub mod grid;
pub mod rng;
pub mod rooms;
pub mod session;

pub use tui_rooms_types as types;

// Re-export commonly used types for convenience
pub use camera::{CollisionKind, GlyphMatrix, MoveOutcome, PlayerCamera, Viewport};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use rooms::{stamp_room, DoorPolicy, Room, RoomGenerator};
pub use session::{Session, Status, Tick, COLLISION_TEXT, HELP_TEXT};
