//! Board module - occupancy grid, goal/hole masks, and tile primitives
//!
//! The board owns every placed tile. Tiles live in an arena indexed by
//! `TileId`; the occupancy grid stores at most one handle per cell, flat
//! row-major. Goal and hole masks share the board dimensions for the
//! board's whole lifetime. Hole cells are pre-occupied at construction by
//! permanent exempt tiles and never count against the win check.

use crate::core::action::ActionQueue;
use crate::core::path::PathProbe;
use crate::core::tile::{Tile, TileState};
use crate::types::{Coord, TileStatus};

/// Handle into the board's tile arena. Never reused within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(u32);

/// The game board.
#[derive(Debug, Clone)]
pub struct Board {
    width: u8,
    height: u8,
    /// True where a tile must sit for the level to be won.
    goal: Vec<bool>,
    /// True where no tile may ever be placed.
    hole: Vec<bool>,
    /// Flat row-major occupancy, one optional handle per cell.
    occupancy: Vec<Option<TileId>>,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create an empty board with all-false goal and hole masks.
    ///
    /// Dimensions are capped at `i8::MAX`; wider boards would hold cells
    /// no `Coord` can address.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            width <= i8::MAX as u8 && height <= i8::MAX as u8,
            "board dimensions exceed the coordinate range"
        );
        let cells = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            goal: vec![false; cells],
            hole: vec![false; cells],
            occupancy: vec![None; cells],
            tiles: Vec::new(),
        }
    }

    /// Create a board from pre-decoded goal and hole masks.
    ///
    /// Masks must match the board dimensions. Every hole cell is occupied
    /// immediately by a permanent blocking tile.
    pub fn with_masks(width: u8, height: u8, goal: Vec<bool>, hole: Vec<bool>) -> Self {
        assert!(
            width <= i8::MAX as u8 && height <= i8::MAX as u8,
            "board dimensions exceed the coordinate range"
        );
        let cells = usize::from(width) * usize::from(height);
        assert_eq!(goal.len(), cells, "goal mask does not match board size");
        assert_eq!(hole.len(), cells, "hole mask does not match board size");

        let mut board = Self {
            width,
            height,
            goal,
            hole: hole.clone(),
            occupancy: vec![None; cells],
            tiles: Vec::new(),
        };
        for (index, is_hole) in hole.iter().enumerate() {
            if *is_hole {
                let x = (index % usize::from(width)) as i8;
                let y = (index / usize::from(width)) as i8;
                let id = board.insert(Tile::hole());
                let placed = board.place(id, x, y);
                debug_assert!(placed);
            }
        }
        board
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Calculate flat index from (x, y); None if out of bounds.
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x as u8 >= self.width || y as u8 >= self.height {
            return None;
        }
        Some(usize::from(y as u8) * usize::from(self.width) + usize::from(x as u8))
    }

    pub fn is_in_board(&self, x: i8, y: i8) -> bool {
        self.index(x, y).is_some()
    }

    pub fn is_goal(&self, x: i8, y: i8) -> bool {
        self.index(x, y).map(|i| self.goal[i]).unwrap_or(false)
    }

    pub fn is_hole(&self, x: i8, y: i8) -> bool {
        self.index(x, y).map(|i| self.hole[i]).unwrap_or(false)
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.tile_id_at(x, y).is_some()
    }

    /// Handle of the tile occupying (x, y), if any.
    pub fn tile_id_at(&self, x: i8, y: i8) -> Option<TileId> {
        self.index(x, y).and_then(|i| self.occupancy[i])
    }

    /// The tile occupying (x, y), if any.
    pub fn tile_at(&self, x: i8, y: i8) -> Option<&Tile> {
        self.tile_id_at(x, y).map(|id| &self.tiles[id.0 as usize])
    }

    /// Look a tile up by handle. Destroyed tiles remain addressable so the
    /// presentation layer can observe their terminal state.
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0 as usize)
    }

    /// Adopt a spawned tile into the arena without placing it.
    pub fn insert(&mut self, tile: Tile) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(tile);
        id
    }

    /// Occupy (x, y) with an already-adopted tile. A tile already on the
    /// board relocates; it never holds two cells at once.
    ///
    /// Fails if the cell is out of bounds or occupied by a different tile.
    /// Goal and hole status never affect legality, only reported status.
    pub fn place(&mut self, id: TileId, x: i8, y: i8) -> bool {
        let Some(index) = self.index(x, y) else {
            return false;
        };
        if self.occupancy[index].is_some_and(|occupant| occupant != id) {
            return false;
        }
        // a re-placed tile vacates its previous cell first
        if let Some(prev) = self.tiles[id.0 as usize].pos() {
            if let Some(prev_index) = self.index(prev.x, prev.y) {
                if self.occupancy[prev_index] == Some(id) {
                    self.occupancy[prev_index] = None;
                }
            }
        }
        self.occupancy[index] = Some(id);
        self.tiles[id.0 as usize].mark_placed(Coord::new(x, y));
        true
    }

    /// Adopt and place a tile in one step.
    pub fn place_at(&mut self, tile: Tile, x: i8, y: i8) -> Option<TileId> {
        if !self.can_place_at(x, y) {
            return None;
        }
        let id = self.insert(tile);
        if self.place(id, x, y) {
            Some(id)
        } else {
            None
        }
    }

    /// Status of (x, y) as seen by a candidate tile not yet on the board.
    pub fn status(&self, x: i8, y: i8) -> TileStatus {
        match self.index(x, y) {
            None => TileStatus::Unplaceable,
            Some(index) if self.occupancy[index].is_some() => TileStatus::Unplaceable,
            Some(index) if self.goal[index] => TileStatus::Correct,
            Some(_) => TileStatus::Incorrect,
        }
    }

    pub fn can_place_at(&self, x: i8, y: i8) -> bool {
        self.status(x, y) != TileStatus::Unplaceable
    }

    /// Whether a Break at (x, y) could succeed, without performing it.
    pub fn can_break_at(&self, x: i8, y: i8) -> bool {
        self.tile_at(x, y).is_some_and(Tile::is_breakable)
    }

    /// Break the tile at (x, y).
    ///
    /// Delegates to the occupying tile's variant behavior; on success the
    /// cell is cleared and the tile destroyed. Follow-up actions generated
    /// by the tile land in the queue's next batch.
    pub fn break_at(&mut self, x: i8, y: i8, queue: &mut ActionQueue) -> bool {
        // TODO: the upper bound here is inclusive (x == width slips past);
        // decide whether edge coordinates should be rejected outright.
        // The occupancy lookup below fails closed for them either way.
        if x < 0 || y < 0 || i16::from(x) > i16::from(self.width) || i16::from(y) > i16::from(self.height)
        {
            return false;
        }
        let Some(index) = self.index(x, y) else {
            return false;
        };
        let Some(id) = self.occupancy[index] else {
            return false;
        };

        let at = Coord::new(x, y);
        if !self.tiles[id.0 as usize].on_break(at, queue) {
            return false;
        }
        self.tiles[id.0 as usize].mark_destroyed();
        self.occupancy[index] = None;
        true
    }

    /// Move the tile at `from` to the empty cell `to`.
    ///
    /// Fails if either coordinate is out of bounds, the destination is
    /// occupied, the source is empty or immovable, or the probe reports
    /// the path closed.
    pub fn move_to<P: PathProbe>(&mut self, from: Coord, to: Coord, probe: &P) -> bool {
        let (Some(src), Some(dst)) = (self.index(from.x, from.y), self.index(to.x, to.y)) else {
            return false;
        };
        if self.occupancy[dst].is_some() {
            return false;
        }
        let Some(id) = self.occupancy[src] else {
            return false;
        };
        if !self.tiles[id.0 as usize].is_movable() {
            return false;
        }
        if !probe.is_open(self, from, to) {
            return false;
        }

        self.tiles[id.0 as usize].begin_move();
        self.occupancy[src] = None;
        self.occupancy[dst] = Some(id);
        self.tiles[id.0 as usize].mark_placed(to);
        true
    }

    /// Silently empty every cell, destroying tiles without break effects.
    /// Level-reset only; cascade state elsewhere is not touched.
    pub fn clear_board(&mut self) {
        for cell in &mut self.occupancy {
            *cell = None;
        }
        for tile in &mut self.tiles {
            if tile.state() != TileState::Destroyed {
                tile.mark_destroyed();
            }
        }
    }

    /// Whether the board is in a winning configuration: every goal cell
    /// occupied, every non-goal cell empty or held only by exempt tiles.
    pub fn check_win(&self) -> bool {
        for index in 0..self.occupancy.len() {
            let occupant = self.occupancy[index];
            if self.goal[index] && occupant.is_none() {
                return false;
            }
            if !self.goal[index] {
                if let Some(id) = occupant {
                    if !self.tiles[id.0 as usize].is_exempt() {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Write one u8 cell code per cell into `out`, row-major.
    /// Zero is empty; occupied cells carry their kind's code.
    pub fn write_cell_codes(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.occupancy.len());
        for cell in &self.occupancy {
            let code = cell
                .map(|id| self.tiles[id.0 as usize].kind().cell_code())
                .unwrap_or(0);
            out.push(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind;

    #[test]
    fn test_index_bounds() {
        let board = Board::new(4, 3);
        assert!(board.is_in_board(0, 0));
        assert!(board.is_in_board(3, 2));
        assert!(!board.is_in_board(4, 0));
        assert!(!board.is_in_board(0, 3));
        assert!(!board.is_in_board(-1, 0));
    }

    #[test]
    fn test_with_masks_preplaces_holes() {
        let mut hole = vec![false; 9];
        hole[4] = true; // (1, 1)
        let board = Board::with_masks(3, 3, vec![false; 9], hole);
        assert!(board.is_hole(1, 1));
        assert!(board.is_occupied(1, 1));
        let tile = board.tile_at(1, 1).expect("hole tile");
        assert_eq!(tile.kind(), TileKind::Hole);
        assert!(tile.is_exempt());
    }

    #[test]
    #[should_panic(expected = "coordinate range")]
    fn test_board_wider_than_coordinate_range_is_rejected() {
        Board::new(130, 1);
    }

    #[test]
    #[should_panic(expected = "coordinate range")]
    fn test_masked_board_taller_than_coordinate_range_is_rejected() {
        Board::with_masks(1, 200, vec![false; 200], vec![false; 200]);
    }

    #[test]
    fn test_place_same_id_vacates_previous_cell() {
        let mut board = Board::new(3, 3);
        let id = board
            .place_at(Tile::new(TileKind::Basic), 0, 0)
            .expect("placement");
        assert!(board.place(id, 2, 2));
        assert!(!board.is_occupied(0, 0));
        assert!(board.is_occupied(2, 2));
        assert_eq!(board.tile(id).and_then(Tile::pos), Some(Coord::new(2, 2)));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new(3, 3);
        assert!(board.place_at(Tile::new(TileKind::Basic), 1, 1).is_some());
        assert!(board.place_at(Tile::new(TileKind::Basic), 1, 1).is_none());
    }

    #[test]
    fn test_status_reports_goal_mismatch() {
        let mut goal = vec![false; 4];
        goal[0] = true; // (0, 0)
        let mut board = Board::with_masks(2, 2, goal, vec![false; 4]);
        assert_eq!(board.status(0, 0), TileStatus::Correct);
        assert_eq!(board.status(1, 0), TileStatus::Incorrect);
        assert_eq!(board.status(5, 0), TileStatus::Unplaceable);
        board.place_at(Tile::new(TileKind::Basic), 0, 0);
        assert_eq!(board.status(0, 0), TileStatus::Unplaceable);
    }

    #[test]
    fn test_break_at_inclusive_upper_bound_fails_closed() {
        let mut board = Board::new(3, 3);
        let mut queue = ActionQueue::new();
        // x == width passes the legacy bounds check but finds no cell
        assert!(!board.break_at(3, 1, &mut queue));
        assert!(!board.break_at(1, 3, &mut queue));
        assert!(!board.break_at(4, 1, &mut queue));
    }

    #[test]
    fn test_write_cell_codes() {
        let mut board = Board::new(2, 2);
        board.place_at(Tile::new(TileKind::Burst), 1, 0);
        let mut codes = Vec::new();
        board.write_cell_codes(&mut codes);
        assert_eq!(codes, vec![0, TileKind::Burst.cell_code(), 0, 0]);
    }
}
