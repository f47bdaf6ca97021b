//! Grid module - owns the generated map
//!
//! The grid is a fixed-size rectangle of cells, sized once at startup.
//! Uses a flat vector in row-major order for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Every accessor takes signed coordinates and treats off-grid positions as a
//! miss (`None`/`false`) instead of faulting, so callers never index past the edge.

use crate::types::{Cell, Occupant, Point, Terrain};

/// The map - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to `terrain` and no occupant
    pub fn new(width: u16, height: u16, terrain: Terrain) -> Self {
        let len = (width as usize) * (height as usize);
        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        };
        grid.fill_rect(terrain, 0, 0, width as i32, height as i32);
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Grid centre, where the player spawns
    pub fn center(&self) -> Point {
        Point::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set terrain at position (x, y)
    /// Returns false if out of bounds or if asked to store the off-grid sentinel
    pub fn set_terrain(&mut self, x: i32, y: i32, terrain: Terrain) -> bool {
        if terrain == Terrain::OutOfBounds {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx].terrain = terrain;
                true
            }
            None => false,
        }
    }

    /// Set occupant at position (x, y)
    /// Returns false if out of bounds
    pub fn set_occupant(&mut self, x: i32, y: i32, occupant: Occupant) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx].occupant = occupant;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a wall (off-grid is not a wall)
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell { terrain: Terrain::Wall, .. }))
    }

    /// Set terrain for every cell of the rectangle that lies on the grid.
    ///
    /// The rectangle may start at negative coordinates or run past the far
    /// edge; only its intersection with the grid is written.
    pub fn fill_rect(&mut self, terrain: Terrain, x: i32, y: i32, w: i32, h: i32) {
        if terrain == Terrain::OutOfBounds || w <= 0 || h <= 0 {
            return;
        }

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let width = self.width as usize;
        for row in y0 as usize..y1 as usize {
            let start = row * width;
            for cell in &mut self.cells[start + x0 as usize..start + x1 as usize] {
                cell.terrain = terrain;
            }
        }
    }

    /// Count cells holding `occupant`
    pub fn count_occupant(&self, occupant: Occupant) -> usize {
        self.cells.iter().filter(|c| c.occupant == occupant).count()
    }

    /// Locate the first cell holding `occupant` (full scan)
    pub fn find_occupant(&self, occupant: Occupant) -> Option<Point> {
        let width = self.width as usize;
        self.cells
            .iter()
            .position(|c| c.occupant == occupant)
            .map(|idx| Point::new((idx % width) as i32, (idx / width) as i32))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Create from rows of terrain for testing
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u16;
        let mut grid = Self::new(width, height, Terrain::Floor);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.set_terrain(x as i32, y as i32, Terrain::Wall);
                }
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(10, 4, Terrain::Floor);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 3), Some(39));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn test_grid_flat_storage() {
        let mut grid = Grid::new(10, 4, Terrain::Floor);

        grid.set_terrain(3, 2, Terrain::Wall);
        grid.set_occupant(1, 1, Occupant::Player);

        assert_eq!(grid.cells[2 * 10 + 3].terrain, Terrain::Wall);
        assert_eq!(grid.cells[10 + 1].occupant, Occupant::Player);
    }

    #[test]
    fn test_fill_rect_clips_both_edges() {
        let mut grid = Grid::new(4, 4, Terrain::Floor);
        grid.fill_rect(Terrain::Wall, -2, -2, 3, 3);
        grid.fill_rect(Terrain::Wall, 3, 3, 10, 10);

        let walls: Vec<_> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| grid.is_wall(x, y))
            .collect();
        assert_eq!(walls, vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn test_fill_rect_ignores_empty_and_sentinel() {
        let mut grid = Grid::new(3, 3, Terrain::Floor);
        grid.fill_rect(Terrain::Wall, 0, 0, 0, 3);
        grid.fill_rect(Terrain::Wall, 0, 0, 3, -1);
        grid.fill_rect(Terrain::OutOfBounds, 0, 0, 3, 3);
        assert!(grid.cells().iter().all(|c| c.terrain == Terrain::Floor));
    }

    #[test]
    fn test_from_rows_and_find() {
        let mut grid = Grid::from_rows(&["...", ".#.", "..."]);
        assert!(grid.is_wall(1, 1));
        assert!(!grid.is_wall(0, 0));
        assert_eq!(grid.find_occupant(Occupant::Player), None);

        grid.set_occupant(2, 1, Occupant::Player);
        assert_eq!(grid.find_occupant(Occupant::Player), Some(Point::new(2, 1)));
        assert_eq!(grid.count_occupant(Occupant::Player), 1);
    }
}
