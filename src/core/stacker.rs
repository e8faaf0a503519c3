//! Stacker module - per-coordinate conflict resolution
//!
//! A batch may carry several actions aimed at the same cell. Before
//! execution the batch is grouped by target coordinate and each group is
//! collapsed to at most one effective action by a fixed, ordered registry
//! of reducers:
//!
//! 1. Break dominance: any Break in the group discards everything else at
//!    that coordinate (a tile about to be destroyed has no pending pushes).
//! 2. Move summation: remaining Move vectors sum into one resultant push;
//!    a zero resultant cancels outright.
//!
//! Groups keep first-seen order, so output order across coordinates is
//! stable but carries no causal priority.

use std::collections::HashMap;

use crate::core::action::Action;
use crate::types::{Coord, MoveVec};

type Reducer = fn(&mut Vec<Action>);

/// Reducers run in declared order for every coordinate group.
const REDUCERS: [Reducer; 2] = [reduce_break_dominance, reduce_move_sum];

/// Collapse a batch to at most one action per coordinate.
pub fn stack_actions(batch: &[Action]) -> Vec<Action> {
    let mut order: Vec<Coord> = Vec::new();
    let mut groups: HashMap<Coord, Vec<Action>> = HashMap::new();
    for action in batch {
        let at = action.target();
        let group = groups.entry(at).or_default();
        if group.is_empty() {
            order.push(at);
        }
        group.push(*action);
    }

    let mut out = Vec::with_capacity(order.len());
    for at in order {
        let mut group = groups.remove(&at).unwrap_or_default();
        for reduce in REDUCERS {
            reduce(&mut group);
        }
        out.extend(group);
    }
    out
}

/// If the group contains a Break, keep only the first Break.
fn reduce_break_dominance(group: &mut Vec<Action>) {
    if let Some(index) = group
        .iter()
        .position(|a| matches!(a, Action::Break { .. }))
    {
        let kept = group[index];
        group.clear();
        group.push(kept);
    }
}

/// Sum all Move vectors in the group into one push; drop a zero resultant.
fn reduce_move_sum(group: &mut Vec<Action>) {
    let mut resultant = MoveVec::ZERO;
    let mut target = None;
    let mut moves = 0;
    group.retain(|action| match *action {
        Action::Move { at, delta } => {
            resultant = resultant.add(delta);
            target = Some(at);
            moves += 1;
            false
        }
        _ => true,
    });
    if moves > 0 && !resultant.is_zero() {
        if let Some(at) = target {
            group.push(Action::push(at, resultant));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_dominates_moves() {
        let at = Coord::new(2, 2);
        let batch = [
            Action::push(at, MoveVec::new(1, 0)),
            Action::break_at(at),
            Action::push(at, MoveVec::new(0, 1)),
        ];
        let effective = stack_actions(&batch);
        assert_eq!(effective, vec![Action::break_at(at)]);
    }

    #[test]
    fn test_opposing_moves_cancel() {
        let at = Coord::new(1, 1);
        let batch = [
            Action::push(at, MoveVec::new(1, 0)),
            Action::push(at, MoveVec::new(-1, 0)),
        ];
        assert!(stack_actions(&batch).is_empty());
    }

    #[test]
    fn test_moves_sum_into_one_push() {
        let at = Coord::new(1, 1);
        let batch = [
            Action::push(at, MoveVec::new(1, 0)),
            Action::push(at, MoveVec::new(0, 1)),
            Action::push(at, MoveVec::new(1, 0)),
        ];
        let effective = stack_actions(&batch);
        assert_eq!(effective, vec![Action::push(at, MoveVec::new(2, 1))]);
    }

    #[test]
    fn test_distinct_coordinates_keep_first_seen_order() {
        let a = Coord::new(0, 0);
        let b = Coord::new(4, 4);
        let batch = [
            Action::break_at(a),
            Action::push(b, MoveVec::new(0, 1)),
            Action::push(a, MoveVec::new(1, 0)),
        ];
        let effective = stack_actions(&batch);
        assert_eq!(
            effective,
            vec![Action::break_at(a), Action::push(b, MoveVec::new(0, 1))]
        );
    }

    #[test]
    fn test_single_break_passes_through() {
        let at = Coord::new(3, 0);
        let effective = stack_actions(&[Action::break_at(at)]);
        assert_eq!(effective, vec![Action::break_at(at)]);
    }
}
