//! Session - the per-tick state machine
//!
//! Owns the grid and the camera, applies one command per tick and keeps the
//! status line that the renderer shows under the map.

use crate::camera::{GlyphMatrix, MoveOutcome, PlayerCamera, Viewport};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::rooms::{Room, RoomGenerator};
use crate::types::{Command, Point, Terrain, STATUS_ROWS};

pub const HELP_TEXT: &str =
    "<j> to move down, <k> to move up, <h> to move left, <l> to move right, <Q> to quit";

pub const COLLISION_TEXT: &str = "Hit!";

/// What the status line currently says
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Help,
    Collision,
}

impl Status {
    pub fn text(&self) -> &'static str {
        match self {
            Status::Help => HELP_TEXT,
            Status::Collision => COLLISION_TEXT,
        }
    }
}

/// Result of applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Keep running; carries the move outcome for movement commands
    Continue(Option<MoveOutcome>),
    /// End the session
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    camera: PlayerCamera,
    status: Status,
    rooms: Vec<Room>,
}

impl Session {
    /// Build a fresh map sized from a `columns` x `rows` display.
    ///
    /// The grid is `map_factor` times the display in each direction; the
    /// viewport is the display minus the status line.
    pub fn generate(
        columns: u16,
        rows: u16,
        map_factor: u16,
        generator: &RoomGenerator,
        rng: &mut SimpleRng,
    ) -> Self {
        let mut grid = Grid::new(
            columns.saturating_mul(map_factor),
            rows.saturating_mul(map_factor),
            Terrain::Floor,
        );
        let rooms = generator.generate(&mut grid, rng);

        // The spawn cell must stay walkable whatever the rooms drew over it.
        let spawn = grid.center();
        grid.set_terrain(spawn.x, spawn.y, Terrain::Floor);

        let mut session = Self::from_grid(grid, columns, rows.saturating_sub(STATUS_ROWS));
        session.rooms = rooms;
        session
    }

    /// Wrap an existing grid, spawning the player at its centre with the
    /// viewport centred on it.
    pub fn from_grid(grid: Grid, viewport_width: u16, viewport_height: u16) -> Self {
        let spawn = grid.center();
        let offset = spawn.offset(
            -(viewport_width as i32 / 2),
            -(viewport_height as i32 / 2),
        );
        let viewport = Viewport::new(viewport_width, viewport_height).with_offset(offset);
        Self::with_viewport(grid, viewport, spawn)
    }

    /// Wrap an existing grid with an explicit viewport and spawn cell.
    pub fn with_viewport(mut grid: Grid, viewport: Viewport, spawn: Point) -> Self {
        let camera = PlayerCamera::spawn(&mut grid, viewport, spawn);
        Self {
            grid,
            camera,
            status: Status::default(),
            rooms: Vec::new(),
        }
    }

    /// Apply one command.
    ///
    /// Movement shifts the viewport by one cell and reconciles the player;
    /// a collision rolls the shift back and switches the status line to the
    /// collision notice. Unknown commands change nothing.
    pub fn apply(&mut self, command: Command) -> Tick {
        if command == Command::Quit {
            return Tick::Quit;
        }
        let Some((dx, dy)) = command.delta() else {
            return Tick::Continue(None);
        };

        self.camera.move_by(dx, dy);
        let outcome = self.camera.update(&mut self.grid);
        self.status = if outcome.is_collision() {
            Status::Collision
        } else {
            Status::Help
        };
        Tick::Continue(Some(outcome))
    }

    pub fn draw(&self) -> GlyphMatrix {
        self.camera.draw(&self.grid)
    }

    pub fn draw_into(&self, out: &mut GlyphMatrix) {
        self.camera.viewport().draw_into(&self.grid, out);
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn camera(&self) -> &PlayerCamera {
        &self.camera
    }

    /// Rooms stamped by `generate`, in drawing order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
