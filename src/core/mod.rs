//! Core module - pure simulation logic with no I/O dependencies
//!
//! This module contains the board, tiles, the deferred action queue, and
//! the conflict-resolution rules. It knows nothing about rendering, input
//! devices, or asset formats.

pub mod action;
pub mod board;
pub mod path;
pub mod piece;
pub mod snapshot;
pub mod stacker;
pub mod tile;

// Re-export commonly used types
pub use action::{Action, ActionQueue};
pub use board::{Board, TileId};
pub use path::{LinePath, OpenPath, PathProbe};
pub use piece::Piece;
pub use snapshot::BoardSnapshot;
pub use stacker::stack_actions;
pub use tile::{Tile, TileState};
