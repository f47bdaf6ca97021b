//! Room generator - stamps walled rooms onto the grid
//!
//! Each room is a one-cell-thick wall rectangle with a single floor opening
//! (the door) in the middle of one side. Rooms are placed blindly: there is no
//! overlap check, later rooms may overwrite earlier ones, and nothing connects
//! them. Rectangles may run past the far edge of the grid; they are clipped.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{DoorSide, Point, Terrain, ROOM_COUNT, ROOM_MAX, ROOM_MIN};

/// Which sides a room's door may be carved on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorPolicy {
    /// Uniform over up, down, left and right
    #[default]
    AllSides,
    /// Uniform over down, left and right (never up)
    Legacy,
}

impl DoorPolicy {
    pub fn sides(&self) -> ArrayVec<DoorSide, 4> {
        let mut sides = ArrayVec::new();
        if *self == DoorPolicy::AllSides {
            sides.push(DoorSide::Up);
        }
        sides.push(DoorSide::Down);
        sides.push(DoorSide::Left);
        sides.push(DoorSide::Right);
        sides
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" | "allsides" => Some(DoorPolicy::AllSides),
            "legacy" => Some(DoorPolicy::Legacy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DoorPolicy::AllSides => "all",
            DoorPolicy::Legacy => "legacy",
        }
    }
}

/// One placement request: rectangle plus door side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub door: DoorSide,
}

impl Room {
    /// Cell carved as the door, `None` for `DoorSide::NoDoor`
    pub fn door_cell(&self) -> Option<Point> {
        let right = self.x + self.width - 1;
        let bottom = self.y + self.height - 1;
        match self.door {
            DoorSide::Up => Some(Point::new(self.x + self.width / 2, self.y)),
            DoorSide::Down => Some(Point::new(self.x + self.width / 2, bottom)),
            DoorSide::Left => Some(Point::new(self.x, self.y + self.height / 2)),
            DoorSide::Right => Some(Point::new(right, self.y + self.height / 2)),
            DoorSide::NoDoor => None,
        }
    }

    /// Whether the cell lies on the room's border ring
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        let right = self.x + self.width - 1;
        let bottom = self.y + self.height - 1;
        let inside = x >= self.x && x <= right && y >= self.y && y <= bottom;
        inside && (x == self.x || x == right || y == self.y || y == bottom)
    }

    /// Whether the whole rectangle lies on the grid
    pub fn fits_in(&self, grid: &Grid) -> bool {
        grid.in_bounds(self.x, self.y)
            && grid.in_bounds(self.x + self.width - 1, self.y + self.height - 1)
    }
}

/// Draw the four border edges of `room` as walls and carve its door.
pub fn stamp_room(grid: &mut Grid, room: &Room) {
    let Room {
        x,
        y,
        width,
        height,
        ..
    } = *room;

    grid.fill_rect(Terrain::Wall, x, y, width, 1);
    grid.fill_rect(Terrain::Wall, x, y, 1, height);
    grid.fill_rect(Terrain::Wall, x + width - 1, y, 1, height);
    grid.fill_rect(Terrain::Wall, x, y + height - 1, width, 1);

    if let Some(door) = room.door_cell() {
        // Off-grid doors (room clipped by the edge) are simply dropped.
        grid.set_terrain(door.x, door.y, Terrain::Floor);
    }
}

/// Stamps a fixed number of rooms onto a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomGenerator {
    pub count: u32,
    pub room_max: i32,
    pub door_policy: DoorPolicy,
}

impl Default for RoomGenerator {
    fn default() -> Self {
        Self {
            count: ROOM_COUNT,
            room_max: ROOM_MAX,
            door_policy: DoorPolicy::default(),
        }
    }
}

impl RoomGenerator {
    pub fn new(count: u32, room_max: i32, door_policy: DoorPolicy) -> Self {
        Self {
            count,
            room_max,
            door_policy,
        }
    }

    /// Choose one room for a `grid_w` x `grid_h` grid.
    ///
    /// Returns `None` when the grid has no interior (either side below 3).
    pub fn plan_room(&self, grid_w: u16, grid_h: u16, rng: &mut SimpleRng) -> Option<Room> {
        let (w, h) = (grid_w as i32, grid_h as i32);
        if w < ROOM_MIN || h < ROOM_MIN {
            return None;
        }

        let door = rng
            .choose(&self.door_policy.sides())
            .unwrap_or(DoorSide::NoDoor);
        let x = rng.next_between(1, w - 2);
        let y = rng.next_between(1, h - 2);
        let width = ROOM_MIN + rng.next_range(self.span(w - x - 2)) as i32;
        let height = ROOM_MIN + rng.next_range(self.span(h - y - 2)) as i32;

        Some(Room {
            x,
            y,
            width,
            height,
            door,
        })
    }

    /// Number of distinct extents above `ROOM_MIN`, never below one.
    fn span(&self, remaining: i32) -> u32 {
        self.room_max.min(remaining).max(1) as u32
    }

    /// Stamp `count` rooms and return them in drawing order.
    pub fn generate(&self, grid: &mut Grid, rng: &mut SimpleRng) -> Vec<Room> {
        let mut rooms = Vec::with_capacity(self.count as usize);
        for _ in 0..self.count {
            let Some(room) = self.plan_room(grid.width(), grid.height(), rng) else {
                break;
            };
            stamp_room(grid, &room);
            rooms.push(room);
        }
        rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Occupant;

    fn room(x: i32, y: i32, width: i32, height: i32, door: DoorSide) -> Room {
        Room {
            x,
            y,
            width,
            height,
            door,
        }
    }

    #[test]
    fn test_door_cells_sit_mid_side() {
        assert_eq!(room(2, 2, 5, 4, DoorSide::Up).door_cell(), Some(Point::new(4, 2)));
        assert_eq!(room(2, 2, 5, 4, DoorSide::Down).door_cell(), Some(Point::new(4, 5)));
        assert_eq!(room(2, 2, 5, 4, DoorSide::Left).door_cell(), Some(Point::new(2, 4)));
        assert_eq!(room(2, 2, 5, 4, DoorSide::Right).door_cell(), Some(Point::new(6, 4)));
        assert_eq!(room(2, 2, 5, 4, DoorSide::NoDoor).door_cell(), None);
    }

    #[test]
    fn test_stamp_room_draws_ring_with_one_door() {
        let mut grid = Grid::new(10, 10, Terrain::Floor);
        let r = room(1, 1, 6, 5, DoorSide::Left);
        stamp_room(&mut grid, &r);

        let door = r.door_cell().unwrap();
        for y in 0..10 {
            for x in 0..10 {
                let expect_wall = r.is_border(x, y) && Point::new(x, y) != door;
                assert_eq!(grid.is_wall(x, y), expect_wall, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_stamp_room_without_door_is_closed() {
        let mut grid = Grid::new(5, 5, Terrain::Floor);
        stamp_room(&mut grid, &room(0, 0, 5, 5, DoorSide::NoDoor));
        let walls = grid.cells().iter().filter(|c| c.terrain == Terrain::Wall).count();
        assert_eq!(walls, 16);
    }

    #[test]
    fn test_stamp_room_clips_at_edge() {
        let mut grid = Grid::new(6, 6, Terrain::Floor);
        // Right side and door at x = 7, past the edge.
        stamp_room(&mut grid, &room(4, 1, 4, 3, DoorSide::Right));
        assert!(grid.is_wall(4, 1));
        assert!(grid.is_wall(5, 1));
        assert!(grid.is_wall(5, 3));
        assert!(!grid.is_wall(5, 2));
        assert_eq!(grid.cells().len(), 36);
    }

    #[test]
    fn test_legacy_policy_excludes_up() {
        let sides = DoorPolicy::Legacy.sides();
        assert_eq!(sides.as_slice(), &[DoorSide::Down, DoorSide::Left, DoorSide::Right]);
        assert_eq!(DoorPolicy::AllSides.sides().len(), 4);
        assert!(!DoorPolicy::AllSides.sides().contains(&DoorSide::NoDoor));
    }

    #[test]
    fn test_plan_room_ranges() {
        let generator = RoomGenerator::default();
        let mut rng = SimpleRng::new(2024);
        for _ in 0..2000 {
            let r = generator.plan_room(40, 20, &mut rng).unwrap();
            assert!((1..=38).contains(&r.x));
            assert!((1..=18).contains(&r.y));
            let max_w = ROOM_MIN + ROOM_MAX.min(40 - r.x - 2).max(1) - 1;
            let max_h = ROOM_MIN + ROOM_MAX.min(20 - r.y - 2).max(1) - 1;
            assert!((ROOM_MIN..=max_w).contains(&r.width), "{:?}", r);
            assert!((ROOM_MIN..=max_h).contains(&r.height), "{:?}", r);
            assert_ne!(r.door, DoorSide::NoDoor);
        }
    }

    #[test]
    fn test_plan_room_near_edge_clamps_to_minimum() {
        let generator = RoomGenerator::default();
        let mut rng = SimpleRng::new(1);
        // On a 3x3 grid the only corner is (1, 1) and nothing remains past it.
        for _ in 0..50 {
            let r = generator.plan_room(3, 3, &mut rng).unwrap();
            assert_eq!((r.x, r.y, r.width, r.height), (1, 1, 3, 3));
        }
    }

    #[test]
    fn test_plan_room_rejects_tiny_grid() {
        let generator = RoomGenerator::default();
        let mut rng = SimpleRng::new(1);
        assert_eq!(generator.plan_room(2, 10, &mut rng), None);
        assert_eq!(generator.plan_room(10, 0, &mut rng), None);
    }

    #[test]
    fn test_generate_stamps_requested_count() {
        let generator = RoomGenerator::new(12, ROOM_MAX, DoorPolicy::AllSides);
        let mut grid = Grid::new(60, 30, Terrain::Floor);
        let rooms = generator.generate(&mut grid, &mut SimpleRng::new(42));
        assert_eq!(rooms.len(), 12);
        assert!(grid.cells().iter().any(|c| c.terrain == Terrain::Wall));
        assert_eq!(grid.count_occupant(Occupant::Player), 0);
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let generator = RoomGenerator::default();
        let mut a = Grid::new(50, 25, Terrain::Floor);
        let mut b = Grid::new(50, 25, Terrain::Floor);
        generator.generate(&mut a, &mut SimpleRng::new(9));
        generator.generate(&mut b, &mut SimpleRng::new(9));
        assert_eq!(a, b);
    }
}
