//! Piece module - polyomino groups of spawned tiles
//!
//! A piece owns its tiles until they are committed to the board. The
//! commit is atomic: every constituent cell validates before any tile is
//! placed, so a blocked cell aborts with no board mutation.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::tile::Tile;
use crate::types::{Coord, TileStatus};

/// Upper bound on constituent tiles in one piece.
pub const MAX_PIECE_TILES: usize = 64;

/// A polyomino piece built from piece data.
#[derive(Debug, Clone)]
pub struct Piece {
    id: u32,
    /// How many tiles must be broken after this piece is placed.
    cost: u32,
    width: u8,
    height: u8,
    /// Row-major cell grid; None where the bounding box is empty.
    tiles: Vec<Option<Tile>>,
}

impl Piece {
    /// Build a piece from its bounding-box cell grid.
    ///
    /// `tiles` must be row-major with `width * height` entries.
    pub fn new(id: u32, cost: u32, width: u8, height: u8, tiles: Vec<Option<Tile>>) -> Self {
        assert_eq!(
            tiles.len(),
            usize::from(width) * usize::from(height),
            "piece grid does not match its bounding box"
        );
        assert!(
            tiles.iter().filter(|cell| cell.is_some()).count() <= MAX_PIECE_TILES,
            "piece exceeds the tile limit"
        );
        Self {
            id,
            cost,
            width,
            height,
            tiles,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of occupied cells in the piece.
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|cell| cell.is_some()).count()
    }

    fn cell(&self, i: u8, j: u8) -> Option<&Tile> {
        let index = usize::from(j) * usize::from(self.width) + usize::from(i);
        self.tiles.get(index).and_then(Option::as_ref)
    }

    /// Iterate occupied cells as (offset within the piece, tile).
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        (0..self.height).flat_map(move |j| {
            (0..self.width).filter_map(move |i| {
                self.cell(i, j)
                    .map(|tile| (Coord::new(i as i8, j as i8), tile))
            })
        })
    }

    /// Per-cell placement status with the piece anchored at `anchor`.
    ///
    /// Polled by the presentation layer to paint a hovering piece.
    pub fn statuses(&self, board: &Board, anchor: Coord) -> Vec<(Coord, TileStatus)> {
        self.cells()
            .map(|(offset, _)| {
                let at = Coord::new(anchor.x + offset.x, anchor.y + offset.y);
                (at, board.status(at.x, at.y))
            })
            .collect()
    }

    /// Whether every constituent cell can currently be placed.
    pub fn can_place(&self, board: &Board, anchor: Coord) -> bool {
        self.cells()
            .all(|(offset, _)| board.can_place_at(anchor.x + offset.x, anchor.y + offset.y))
    }

    /// Commit every constituent tile to the board, anchored at `anchor`.
    ///
    /// All-or-nothing: if any cell is unplaceable, nothing is mutated and
    /// this returns false.
    pub fn add_tiles_to_board(&self, board: &mut Board, anchor: Coord) -> bool {
        let mut pending: ArrayVec<(Coord, &Tile), MAX_PIECE_TILES> = ArrayVec::new();
        for (offset, tile) in self.cells() {
            let at = Coord::new(anchor.x + offset.x, anchor.y + offset.y);
            if !board.can_place_at(at.x, at.y) {
                return false;
            }
            pending.push((at, tile));
        }
        for (at, tile) in pending {
            let placed = board.place_at(tile.clone(), at.x, at.y).is_some();
            debug_assert!(placed);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind;

    /// 2x2 corner piece: two tiles on the top row, one below-left.
    fn corner_piece(cost: u32) -> Piece {
        Piece::new(
            1,
            cost,
            2,
            2,
            vec![
                Some(Tile::new(TileKind::Basic)),
                Some(Tile::new(TileKind::Basic)),
                Some(Tile::new(TileKind::Basic)),
                None,
            ],
        )
    }

    #[test]
    fn test_tile_count_skips_gaps() {
        assert_eq!(corner_piece(0).tile_count(), 3);
    }

    #[test]
    fn test_commit_places_every_cell() {
        let mut board = Board::new(4, 4);
        let piece = corner_piece(1);
        assert!(piece.add_tiles_to_board(&mut board, Coord::new(1, 1)));
        assert!(board.is_occupied(1, 1));
        assert!(board.is_occupied(2, 1));
        assert!(board.is_occupied(1, 2));
        assert!(!board.is_occupied(2, 2));
    }

    #[test]
    fn test_commit_is_atomic_on_obstruction() {
        let mut board = Board::new(4, 4);
        board.place_at(Tile::new(TileKind::Basic), 2, 1);
        let piece = corner_piece(1);
        assert!(!piece.add_tiles_to_board(&mut board, Coord::new(1, 1)));
        // no partial placement
        assert!(!board.is_occupied(1, 1));
        assert!(!board.is_occupied(1, 2));
    }

    #[test]
    fn test_commit_fails_out_of_bounds() {
        let mut board = Board::new(2, 2);
        let piece = corner_piece(0);
        assert!(!piece.add_tiles_to_board(&mut board, Coord::new(1, 1)));
        assert!(!board.is_occupied(1, 1));
    }

    #[test]
    fn test_statuses_reflect_goal_mask() {
        let mut goal = vec![false; 16];
        goal[5] = true; // (1, 1)
        let board = Board::with_masks(4, 4, goal, vec![false; 16]);
        let piece = corner_piece(0);
        let statuses = piece.statuses(&board, Coord::new(1, 1));
        assert!(statuses.contains(&(Coord::new(1, 1), TileStatus::Correct)));
        assert!(statuses.contains(&(Coord::new(2, 1), TileStatus::Incorrect)));
    }
}
