//! Viewport and player camera.
//!
//! The viewport is a window onto the grid whose top-left corner sits at the
//! current offset. The camera ties the single player to the viewport centre:
//! scrolling the viewport is how the player moves, and a move that would put
//! the centre on a wall or past the edge is rolled back to the last good offset.

use crate::grid::Grid;
use crate::types::{Glyph, Occupant, Point, Terrain};

/// Row-major matrix of glyphs, one per viewport position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMatrix {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl GlyphMatrix {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Glyph> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.glyphs[(row as usize) * (self.width as usize) + (col as usize)])
    }

    /// One row of glyphs, left to right
    pub fn row(&self, row: u16) -> &[Glyph] {
        if row >= self.height {
            return &[];
        }
        let start = (row as usize) * (self.width as usize);
        &self.glyphs[start..start + self.width as usize]
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }
}

/// Sub-window into the grid with a one-step undo for its offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: Point,
    last_offset: Point,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            offset: Point::default(),
            last_offset: Point::default(),
        }
    }

    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self.last_offset = offset;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Offset before the most recent `move_by`
    pub fn last_offset(&self) -> Point {
        self.last_offset
    }

    /// Grid coordinate shown at the viewport centre (upper-left of centre for even sizes)
    pub fn center(&self) -> Point {
        self.offset
            .offset(self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Remember the current offset, then shift by (dx, dy). No validation.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.last_offset = self.offset;
        self.offset = self.offset.offset(dx, dy);
    }

    /// Restore the offset recorded by the last `move_by`
    pub fn revert(&mut self) {
        self.offset = self.last_offset;
    }

    /// Render the window into a fresh glyph matrix. Pure read.
    pub fn draw(&self, grid: &Grid) -> GlyphMatrix {
        let mut out = GlyphMatrix::new(self.width, self.height);
        self.draw_into(grid, &mut out);
        out
    }

    /// Render into an existing matrix, resizing it when needed.
    pub fn draw_into(&self, grid: &Grid, out: &mut GlyphMatrix) {
        let len = (self.width as usize) * (self.height as usize);
        out.width = self.width;
        out.height = self.height;
        out.glyphs.resize(len, Glyph::default());

        for row in 0..self.height {
            for col in 0..self.width {
                let x = self.offset.x + col as i32;
                let y = self.offset.y + row as i32;
                let glyph = match grid.get(x, y) {
                    None => Glyph::Terrain(Terrain::OutOfBounds),
                    Some(cell) if cell.occupant == Occupant::Player => Glyph::Player,
                    Some(cell) => Glyph::Terrain(cell.terrain),
                };
                out.glyphs[(row as usize) * (self.width as usize) + col as usize] = glyph;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Target cell is a wall
    Wall,
    /// Target lies past the grid edge
    Edge,
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::Wall => "wall",
            CollisionKind::Edge => "edge",
        }
    }
}

/// Result of reconciling the player with the viewport centre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Player now stands at the given cell
    Moved(Point),
    /// Offset was rolled back; the player did not move
    Collision { target: Point, kind: CollisionKind },
}

impl MoveOutcome {
    pub fn is_collision(&self) -> bool {
        matches!(self, MoveOutcome::Collision { .. })
    }
}

/// Couples the viewport offset to the single player occupant
#[derive(Debug, Clone)]
pub struct PlayerCamera {
    viewport: Viewport,
    /// Cell currently holding `Occupant::Player`
    player: Point,
}

impl PlayerCamera {
    /// Place the player at `at` and attach the camera to it.
    ///
    /// Any stray player occupant already on the grid is cleared first so the
    /// grid never holds more than one.
    pub fn spawn(grid: &mut Grid, viewport: Viewport, at: Point) -> Self {
        while let Some(stray) = grid.find_occupant(Occupant::Player) {
            grid.set_occupant(stray.x, stray.y, Occupant::None);
        }
        grid.set_occupant(at.x, at.y, Occupant::Player);
        Self {
            viewport,
            player: at,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn player(&self) -> Point {
        self.player
    }

    /// Shift the viewport; call `update` afterwards to validate.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.viewport.move_by(dx, dy);
    }

    /// Move the player to the viewport centre, or roll the offset back.
    pub fn update(&mut self, grid: &mut Grid) -> MoveOutcome {
        let target = self.viewport.center();

        let kind = match grid.get(target.x, target.y) {
            None => Some(CollisionKind::Edge),
            Some(cell) if cell.terrain == Terrain::Wall => Some(CollisionKind::Wall),
            Some(_) => None,
        };
        if let Some(kind) = kind {
            self.viewport.revert();
            return MoveOutcome::Collision { target, kind };
        }

        if target != self.player {
            grid.set_occupant(self.player.x, self.player.y, Occupant::None);
        }
        grid.set_occupant(target.x, target.y, Occupant::Player);
        self.player = target;
        MoveOutcome::Moved(target)
    }

    /// Render the current window
    pub fn draw(&self, grid: &Grid) -> GlyphMatrix {
        self.viewport.draw(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_5x5() -> (Grid, PlayerCamera) {
        let mut grid = Grid::new(5, 5, Terrain::Floor);
        let camera = PlayerCamera::spawn(&mut grid, Viewport::new(3, 3), Point::new(2, 2));
        (grid, camera)
    }

    #[test]
    fn test_move_records_last_offset() {
        let mut vp = Viewport::new(3, 3).with_offset(Point::new(4, 4));
        vp.move_by(-1, 2);
        assert_eq!(vp.offset(), Point::new(3, 6));
        assert_eq!(vp.last_offset(), Point::new(4, 4));
        vp.revert();
        assert_eq!(vp.offset(), Point::new(4, 4));
    }

    #[test]
    fn test_center_uses_half_extents() {
        let vp = Viewport::new(4, 3).with_offset(Point::new(10, 20));
        assert_eq!(vp.center(), Point::new(12, 21));
    }

    #[test]
    fn test_draw_marks_out_of_bounds() {
        let grid = Grid::new(2, 2, Terrain::Floor);
        let vp = Viewport::new(3, 3).with_offset(Point::new(-1, 0));
        let m = vp.draw(&grid);

        let oob = Glyph::Terrain(Terrain::OutOfBounds);
        let floor = Glyph::Terrain(Terrain::Floor);
        assert_eq!(m.row(0), &[oob, floor, floor]);
        assert_eq!(m.row(1), &[oob, floor, floor]);
        assert_eq!(m.row(2), &[oob, oob, oob]);
        assert_eq!(m.row(3), &[] as &[Glyph]);
    }

    #[test]
    fn test_draw_prefers_player_over_terrain() {
        let (grid, camera) = open_5x5();
        let m = camera
            .viewport()
            .with_offset(Point::new(1, 1))
            .draw(&grid);
        assert_eq!(m.get(1, 1), Some(Glyph::Player));
        assert_eq!(m.get(0, 0), Some(Glyph::Terrain(Terrain::Floor)));
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn test_update_moves_player_to_center() {
        let (mut grid, mut camera) = open_5x5();
        camera.move_by(1, 0);
        assert_eq!(camera.update(&mut grid), MoveOutcome::Moved(Point::new(2, 1)));
        assert_eq!(camera.player(), Point::new(2, 1));
        assert_eq!(grid.find_occupant(Occupant::Player), Some(Point::new(2, 1)));
        assert_eq!(grid.count_occupant(Occupant::Player), 1);
    }

    #[test]
    fn test_update_reverts_on_wall() {
        let (mut grid, mut camera) = open_5x5();
        grid.set_terrain(2, 1, Terrain::Wall);
        camera.move_by(1, 0);
        let outcome = camera.update(&mut grid);
        assert_eq!(
            outcome,
            MoveOutcome::Collision {
                target: Point::new(2, 1),
                kind: CollisionKind::Wall
            }
        );
        assert_eq!(camera.viewport().offset(), Point::new(0, 0));
        assert_eq!(camera.player(), Point::new(2, 2));
        assert_eq!(grid.find_occupant(Occupant::Player), Some(Point::new(2, 2)));
    }

    #[test]
    fn test_update_reverts_past_edge() {
        let (mut grid, mut camera) = open_5x5();
        camera.move_by(-2, 0);
        let outcome = camera.update(&mut grid);
        assert_eq!(
            outcome,
            MoveOutcome::Collision {
                target: Point::new(-1, 1),
                kind: CollisionKind::Edge
            }
        );
        assert_eq!(camera.viewport().offset(), Point::new(0, 0));
        assert_eq!(grid.count_occupant(Occupant::Player), 1);
    }

    #[test]
    fn test_spawn_clears_stray_players() {
        let mut grid = Grid::new(4, 4, Terrain::Floor);
        grid.set_occupant(0, 0, Occupant::Player);
        grid.set_occupant(3, 3, Occupant::Player);
        let camera = PlayerCamera::spawn(&mut grid, Viewport::new(2, 2), Point::new(1, 1));
        assert_eq!(camera.player(), Point::new(1, 1));
        assert_eq!(grid.count_occupant(Occupant::Player), 1);
    }
}
