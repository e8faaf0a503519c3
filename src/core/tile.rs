//! Tile module - the entity occupying a board cell
//!
//! A tile is plain data: its kind drives break behavior and movability,
//! its state tracks the Spawned -> Placed -> {Breaking -> Destroyed,
//! Moving -> Placed} lifecycle. Break side effects (Burst, Gust) never
//! touch the board directly; they enqueue actions for the next tick.

use crate::core::action::{Action, ActionQueue};
use crate::types::{Coord, TileKind, ORTHOGONAL};

/// Lifecycle state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// Created as part of a piece, not yet on the board.
    Spawned,
    /// Committed to a board cell.
    Placed,
    /// A Break succeeded; side effects are firing. Transient.
    Breaking,
    /// A Move succeeded; relocating. Transient.
    Moving,
    /// Removed from play. Terminal.
    Destroyed,
}

/// A single tile occupying zero or one board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    kind: TileKind,
    state: TileState,
    pos: Option<Coord>,
    movable: bool,
    exempt: bool,
}

impl Tile {
    /// Create a spawned tile with the kind's default flags.
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            state: TileState::Spawned,
            pos: None,
            movable: kind.default_movable(),
            exempt: kind.default_exempt(),
        }
    }

    /// Create an unbreakable tile with explicit movability.
    ///
    /// Movability of unbreakable tiles is level configuration, not a rule.
    pub fn unbreakable(movable: bool) -> Self {
        let mut tile = Self::new(TileKind::Unbreakable);
        tile.movable = movable;
        tile
    }

    /// Create the permanent blocking tile used for hole cells.
    pub fn hole() -> Self {
        Self::new(TileKind::Hole)
    }

    /// Mark the tile as ignored by the win check.
    pub fn with_exempt(mut self, exempt: bool) -> Self {
        self.exempt = exempt;
        self
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    /// Board coordinate, valid only while the tile is on the board.
    pub fn pos(&self) -> Option<Coord> {
        self.pos
    }

    pub fn is_movable(&self) -> bool {
        self.movable
    }

    pub fn is_breakable(&self) -> bool {
        self.kind.breakable()
    }

    pub fn is_exempt(&self) -> bool {
        self.exempt
    }

    pub(crate) fn mark_placed(&mut self, at: Coord) {
        self.state = TileState::Placed;
        self.pos = Some(at);
    }

    /// Start of a relocation; `mark_placed` completes it at the new cell.
    pub(crate) fn begin_move(&mut self) {
        self.state = TileState::Moving;
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.state = TileState::Destroyed;
        self.pos = None;
    }

    /// Variant break behavior.
    ///
    /// Returns false if the tile refuses to break (Unbreakable, Hole) and
    /// leaves it untouched. Otherwise transitions to Breaking, enqueues any
    /// follow-up actions for the next tick, and returns true; the board
    /// then clears the cell and finalizes destruction.
    pub(crate) fn on_break(&mut self, at: Coord, queue: &mut ActionQueue) -> bool {
        match self.kind {
            TileKind::Unbreakable | TileKind::Hole => false,
            TileKind::Basic => {
                self.state = TileState::Breaking;
                true
            }
            TileKind::Burst => {
                self.state = TileState::Breaking;
                for delta in ORTHOGONAL {
                    queue.queue_action(Action::break_at(at.offset(delta)));
                }
                true
            }
            TileKind::Gust => {
                self.state = TileState::Breaking;
                // each neighbor is pushed one cell further outward
                for delta in ORTHOGONAL {
                    queue.queue_action(Action::push(at.offset(delta), delta));
                }
                true
            }
        }
    }
}
