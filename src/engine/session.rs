//! Session module - place/break phase flow over one level
//!
//! A session owns the board, the action queue, and the roster of pieces
//! still in hand. Play alternates between two phases: in Place the player
//! commits one piece, which charges its removal cost; in Break the player
//! queues breaks until the cost is paid off. Once the roster and the
//! queues are empty the session settles and the win check decides the
//! outcome.

use crate::core::{Action, ActionQueue, Board, PathProbe, Piece};
use crate::types::Coord;

/// Which kind of command the session currently accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a piece placement.
    Place,
    /// Waiting for break requests until the quota is paid.
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    NotInPlacePhase,
    NotInBreakPhase,
    NoSuchPiece,
    PlacementBlocked,
    NothingToBreak,
    BreakRefused,
}

impl CommandError {
    pub fn code(self) -> &'static str {
        match self {
            CommandError::NotInPlacePhase | CommandError::NotInBreakPhase => "wrong_phase",
            CommandError::NoSuchPiece => "no_such_piece",
            CommandError::PlacementBlocked => "invalid_place",
            CommandError::NothingToBreak | CommandError::BreakRefused => "invalid_break",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CommandError::NotInPlacePhase => "placement requested outside the place phase",
            CommandError::NotInBreakPhase => "break requested outside the break phase",
            CommandError::NoSuchPiece => "no piece with that index remains in hand",
            CommandError::PlacementBlocked => "at least one piece cell is unplaceable",
            CommandError::NothingToBreak => "no tile at the requested cell",
            CommandError::BreakRefused => "the tile at the requested cell cannot break",
        }
    }
}

/// One level of play: board, queue, and the pieces still in hand.
#[derive(Debug)]
pub struct Session {
    board: Board,
    queue: ActionQueue,
    pieces: Vec<Piece>,
    phase: Phase,
    /// Breaks still owed for the last placement.
    to_remove: u32,
}

impl Session {
    pub fn new(board: Board, pieces: Vec<Piece>) -> Self {
        Self {
            board,
            queue: ActionQueue::new(),
            pieces,
            phase: Phase::Place,
            to_remove: 0,
        }
    }

    /// Change the queue's pacing (cadence only, outcomes unchanged).
    /// Anything already queued stays queued.
    pub fn with_cooldown(mut self, cooldown_ticks: u8) -> Self {
        self.queue.set_cooldown_ticks(cooldown_ticks);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Breaks still owed before the next placement is allowed.
    pub fn remaining_breaks(&self) -> u32 {
        self.to_remove
    }

    /// Pieces still in hand, in roster order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Commit the piece at `index` anchored at `anchor`.
    ///
    /// On success the piece leaves the roster and its cost becomes the
    /// break quota; a non-zero quota switches the session to Break.
    pub fn place_piece(&mut self, index: usize, anchor: Coord) -> Result<(), CommandError> {
        if self.phase != Phase::Place {
            return Err(CommandError::NotInPlacePhase);
        }
        let piece = self.pieces.get(index).ok_or(CommandError::NoSuchPiece)?;
        if !piece.add_tiles_to_board(&mut self.board, anchor) {
            return Err(CommandError::PlacementBlocked);
        }
        let piece = self.pieces.remove(index);
        self.to_remove = piece.cost();
        if self.to_remove > 0 {
            self.phase = Phase::Break;
        }
        Ok(())
    }

    /// Spend one unit of the break quota on the tile at `at`.
    ///
    /// The break itself resolves on a later tick through the queue; the
    /// quota is charged as soon as the request is accepted. Paying the
    /// quota off returns the session to Place.
    pub fn request_break(&mut self, at: Coord) -> Result<(), CommandError> {
        if self.phase != Phase::Break {
            return Err(CommandError::NotInBreakPhase);
        }
        if !self.board.is_occupied(at.x, at.y) {
            return Err(CommandError::NothingToBreak);
        }
        if !self.board.can_break_at(at.x, at.y) {
            return Err(CommandError::BreakRefused);
        }
        self.queue.queue_action(Action::break_at(at));
        self.to_remove -= 1;
        if self.to_remove == 0 {
            self.phase = Phase::Place;
        }
        Ok(())
    }

    /// Advance the simulation one tick.
    pub fn tick<P: PathProbe>(&mut self, probe: &P) -> usize {
        self.queue.tick(&mut self.board, probe)
    }

    /// Tick until all queued cascades resolve; returns ticks run.
    pub fn settle<P: PathProbe>(&mut self, probe: &P) -> usize {
        self.queue.run_to_idle(&mut self.board, probe)
    }

    /// True when nothing is queued or in flight.
    pub fn is_settled(&self) -> bool {
        self.queue.are_queues_clear()
    }

    /// The level outcome, once play has finished.
    ///
    /// None while pieces remain in hand, the break quota is unpaid, or
    /// cascades are still resolving.
    pub fn outcome(&self) -> Option<bool> {
        if self.pieces.is_empty() && self.to_remove == 0 && self.is_settled() {
            Some(self.board.check_win())
        } else {
            None
        }
    }
}
