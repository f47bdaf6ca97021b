//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (map logic, terminal rendering, event logging).
//!
//! # Map Dimensions
//!
//! The map is sized from the terminal at startup:
//!
//! - **Grid**: `columns * MAP_FACTOR` by `rows * MAP_FACTOR` cells
//! - **Viewport**: `columns` by `rows - STATUS_ROWS` cells
//!
//! # Generation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAP_FACTOR` | 2 | Grid size as a multiple of the display |
//! | `ROOM_COUNT` | 50 | Rooms stamped per session |
//! | `ROOM_MIN` | 3 | Smallest room extent (walls included) |
//! | `ROOM_MAX` | 15 | Largest random span added on top of `ROOM_MIN` |
//!
//! # Examples
//!
//! ```
//! use tui_rooms_types::{Command, Terrain, Glyph, ROOM_MIN};
//!
//! // Parse a command (case-insensitive)
//! let cmd = Command::from_str("moveRight").unwrap();
//! assert_eq!(cmd.delta(), Some((1, 0)));
//!
//! // Quit carries no movement
//! assert_eq!(Command::Quit.delta(), None);
//!
//! // Terrain glyphs
//! assert_eq!(Glyph::from(Terrain::Wall), Glyph::Terrain(Terrain::Wall));
//! assert_eq!(ROOM_MIN, 3);
//! ```

/// Grid size as a multiple of the display size
pub const MAP_FACTOR: u16 = 2;

/// Number of rooms stamped onto a fresh map
pub const ROOM_COUNT: u32 = 50;

/// Smallest room extent in cells (one floor cell plus two walls)
pub const ROOM_MIN: i32 = 3;

/// Upper bound on the random span added to `ROOM_MIN`
pub const ROOM_MAX: i32 = 15;

/// Display rows reserved below the map for the status line
pub const STATUS_ROWS: u16 = 1;


/// Passable/impassable classification of a map cell
///
/// - **Floor**: walkable, and the default fill of a new grid
/// - **Wall**: blocks the player
/// - **OutOfBounds**: sentinel for positions past the grid edge; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Terrain {
    #[default]
    Floor,
    Wall,
    OutOfBounds,
}

impl Terrain {
    /// Whether the player may stand on this terrain
    pub fn is_passable(&self) -> bool {
        matches!(self, Terrain::Floor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Floor => "floor",
            Terrain::Wall => "wall",
            Terrain::OutOfBounds => "outOfBounds",
        }
    }
}

/// Living entity held by a cell
///
/// Only a single `Player` may exist on the grid at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    None,
    Player,
}

/// A cell on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub terrain: Terrain,
    pub occupant: Occupant,
}

impl Cell {
    pub const fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            occupant: Occupant::None,
        }
    }
}

/// Signed grid coordinate
///
/// Also used as a viewport offset, which may point outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Where a room's single floor opening is carved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorSide {
    Up,
    Down,
    Left,
    Right,
    NoDoor,
}

impl DoorSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoorSide::Up => "up",
            DoorSide::Down => "down",
            DoorSide::Left => "left",
            DoorSide::Right => "right",
            DoorSide::NoDoor => "none",
        }
    }
}

/// Commands driving the session
///
/// These are produced by the input layer, one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Scroll the viewport (and the player) one cell up
    MoveUp,
    /// Scroll one cell down
    MoveDown,
    /// Scroll one cell left
    MoveLeft,
    /// Scroll one cell right
    MoveRight,
    /// Reset the display and end the session
    Quit,
    /// Anything else; ignored
    Unknown,
}

impl Command {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_rooms_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveUp"), Some(Command::MoveUp));
    /// assert_eq!(Command::from_str("QUIT"), Some(Command::Quit));
    /// assert_eq!(Command::from_str("dance"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(Command::MoveUp),
            "movedown" => Some(Command::MoveDown),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "quit" => Some(Command::Quit),
            "unknown" => Some(Command::Unknown),
            _ => None,
        }
    }

    /// Convert to camelCase string (used in the event log)
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveUp => "moveUp",
            Command::MoveDown => "moveDown",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Quit => "quit",
            Command::Unknown => "unknown",
        }
    }

    /// Unit offset change for movement commands
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Command::MoveUp => Some((0, -1)),
            Command::MoveDown => Some((0, 1)),
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            Command::Quit | Command::Unknown => None,
        }
    }
}

/// Renderable descriptor for one viewport position
///
/// Positions past the grid edge are `Glyph::Terrain(Terrain::OutOfBounds)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Terrain(Terrain),
    Player,
}

impl From<Terrain> for Glyph {
    fn from(terrain: Terrain) -> Self {
        Glyph::Terrain(terrain)
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::Terrain(Terrain::OutOfBounds)
    }
}
