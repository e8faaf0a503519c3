//! Action module - deferred board mutations and the tick scheduler
//!
//! Actions are value data: an intent to break or push the tile at one
//! coordinate. They are batched in a double-buffered queue so that all
//! actions submitted within one tick resolve "simultaneously", while any
//! follow-up actions they generate land in the next batch. That bounds
//! cascades to one new generation per tick and keeps them observable
//! step by step.

use crate::core::board::Board;
use crate::core::path::PathProbe;
use crate::core::stacker::stack_actions;
use crate::types::{Coord, MoveVec, BATCH_COOLDOWN_TICKS};

/// An intent targeting a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Break whatever tile sits at `at`.
    Break { at: Coord },
    /// Push the tile at `at` by `delta`.
    Move { at: Coord, delta: MoveVec },
}

impl Action {
    pub fn break_at(at: Coord) -> Self {
        Action::Break { at }
    }

    pub fn push(at: Coord, delta: MoveVec) -> Self {
        Action::Move { at, delta }
    }

    /// The coordinate this action acts on.
    pub fn target(&self) -> Coord {
        match *self {
            Action::Break { at } | Action::Move { at, .. } => at,
        }
    }
}

/// Double-buffered action scheduler.
///
/// `queue_action` always appends to the next batch, so it is safe to call
/// from tile behavior while the current batch is draining. `tick` resolves
/// one batch: conflicts are reduced per coordinate, survivors execute
/// against the board in insertion order, then the buffers swap.
#[derive(Debug, Default)]
pub struct ActionQueue {
    current: Vec<Action>,
    next: Vec<Action>,
    cooldown: u8,
    cooldown_ticks: u8,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::with_cooldown(BATCH_COOLDOWN_TICKS)
    }

    /// Queue with a custom inter-batch cooldown. Zero means batches
    /// resolve on consecutive ticks; final outcomes are unaffected.
    pub fn with_cooldown(cooldown_ticks: u8) -> Self {
        Self {
            current: Vec::new(),
            next: Vec::new(),
            cooldown: 0,
            cooldown_ticks,
        }
    }

    /// Change the inter-batch cooldown. Pending batches are kept; an
    /// active cooldown is clamped down to the new pacing.
    pub fn set_cooldown_ticks(&mut self, cooldown_ticks: u8) {
        self.cooldown_ticks = cooldown_ticks;
        self.cooldown = self.cooldown.min(cooldown_ticks);
    }

    /// Schedule an action for the next batch.
    pub fn queue_action(&mut self, action: Action) {
        self.next.push(action);
    }

    /// True iff no work remains in either buffer.
    pub fn are_queues_clear(&self) -> bool {
        self.current.is_empty() && self.next.is_empty()
    }

    pub fn current_len(&self) -> usize {
        self.current.len()
    }

    pub fn next_len(&self) -> usize {
        self.next.len()
    }

    /// Actions waiting in the next batch, in insertion order.
    pub fn pending_next(&self) -> &[Action] {
        &self.next
    }

    /// Advance the scheduler by one tick.
    ///
    /// During cooldown this only decrements the idle counter. Otherwise the
    /// current batch is reduced by the stacker and executed; actions whose
    /// board operation fails (out of bounds, empty cell, refused break,
    /// blocked move) are dropped silently. Returns the number of actions
    /// that executed successfully this tick.
    pub fn tick<P: PathProbe>(&mut self, board: &mut Board, probe: &P) -> usize {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return 0;
        }
        if self.are_queues_clear() {
            return 0;
        }

        let batch = std::mem::take(&mut self.current);
        let effective = stack_actions(&batch);

        let mut applied = 0;
        for action in &effective {
            let ok = match *action {
                Action::Break { at } => board.break_at(at.x, at.y, self),
                Action::Move { at, delta } => board.move_to(at, at.offset(delta), probe),
            };
            if ok {
                applied += 1;
            }
        }

        // cascades queued during execution become the next batch
        self.current = std::mem::take(&mut self.next);
        self.cooldown = self.cooldown_ticks;
        applied
    }

    /// Tick until both buffers are empty; returns the number of ticks run.
    ///
    /// Terminates because every executed action removes or relocates
    /// exactly one tile and propagation targets a bounded neighborhood.
    pub fn run_to_idle<P: PathProbe>(&mut self, board: &mut Board, probe: &P) -> usize {
        let mut ticks = 0;
        while !self.are_queues_clear() {
            self.tick(board, probe);
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::path::OpenPath;
    use crate::core::tile::Tile;
    use crate::types::TileKind;

    #[test]
    fn test_queue_action_lands_in_next_batch() {
        let mut queue = ActionQueue::new();
        queue.queue_action(Action::break_at(Coord::new(1, 1)));
        assert_eq!(queue.current_len(), 0);
        assert_eq!(queue.next_len(), 1);
        assert!(!queue.are_queues_clear());
    }

    #[test]
    fn test_tick_swaps_buffers() {
        let mut board = Board::new(3, 3);
        let mut queue = ActionQueue::with_cooldown(0);
        queue.queue_action(Action::break_at(Coord::new(1, 1)));

        // first tick executes the (empty) current batch and promotes next
        queue.tick(&mut board, &OpenPath);
        assert_eq!(queue.current_len(), 1);
        assert_eq!(queue.next_len(), 0);

        queue.tick(&mut board, &OpenPath);
        assert!(queue.are_queues_clear());
    }

    #[test]
    fn test_cooldown_only_counts_down() {
        let mut board = Board::new(3, 3);
        board
            .place_at(Tile::new(TileKind::Basic), 1, 1)
            .expect("place");
        let mut queue = ActionQueue::with_cooldown(3);
        queue.queue_action(Action::break_at(Coord::new(1, 1)));

        // promote into current, which arms the cooldown
        queue.tick(&mut board, &OpenPath);
        assert!(board.is_occupied(1, 1));

        // three idle ticks pass before the batch fires
        for _ in 0..3 {
            assert_eq!(queue.tick(&mut board, &OpenPath), 0);
        }
        assert_eq!(queue.tick(&mut board, &OpenPath), 1);
        assert!(!board.is_occupied(1, 1));
    }

    #[test]
    fn test_set_cooldown_ticks_keeps_pending_work() {
        let mut queue = ActionQueue::new();
        queue.queue_action(Action::break_at(Coord::new(1, 1)));
        queue.set_cooldown_ticks(0);
        assert_eq!(queue.next_len(), 1);
        assert!(!queue.are_queues_clear());
    }

    #[test]
    fn test_failed_actions_are_dropped() {
        let mut board = Board::new(3, 3);
        let mut queue = ActionQueue::with_cooldown(0);
        // nothing at the target, and a second action off the board entirely
        queue.queue_action(Action::break_at(Coord::new(2, 2)));
        queue.queue_action(Action::break_at(Coord::new(-1, 0)));

        queue.tick(&mut board, &OpenPath);
        assert_eq!(queue.tick(&mut board, &OpenPath), 0);
        assert!(queue.are_queues_clear());
    }

    #[test]
    fn test_run_to_idle_drains_everything() {
        let mut board = Board::new(3, 3);
        board
            .place_at(Tile::new(TileKind::Basic), 0, 0)
            .expect("place");
        let mut queue = ActionQueue::new();
        queue.queue_action(Action::break_at(Coord::new(0, 0)));
        let ticks = queue.run_to_idle(&mut board, &OpenPath);
        assert!(ticks > 0);
        assert!(queue.are_queues_clear());
        assert!(!board.is_occupied(0, 0));
    }
}
