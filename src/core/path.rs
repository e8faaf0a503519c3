//! Path module - the "is the way clear" predicate used by moves
//!
//! The geometry collaborator that owns real raycasting lives outside this
//! crate; the simulation only needs a yes/no answer, so the question is a
//! trait. `LinePath` is the built-in grid approximation: it samples a
//! straight segment between the two cell centers, nudged off-center the
//! way the original rays were, and reports closed if any intermediate
//! occupied cell intersects the corridor.

use crate::core::board::Board;
use crate::types::Coord;

/// Yes/no predicate for whether a tile can travel from one cell to another.
pub trait PathProbe {
    fn is_open(&self, board: &Board, from: Coord, to: Coord) -> bool;
}

/// Probe that always answers open. Useful in tests and for rule sets
/// where pushes pass over occupied cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenPath;

impl PathProbe for OpenPath {
    fn is_open(&self, _board: &Board, _from: Coord, _to: Coord) -> bool {
        true
    }
}

/// Corner offsets for the four sampling rays, in cell units. Small enough
/// that samples near the endpoints still round into the endpoint cells.
const RAY_OFFSET: f32 = 0.3;

const RAY_CORNERS: [(f32, f32); 4] = [
    (RAY_OFFSET, RAY_OFFSET),
    (-RAY_OFFSET, RAY_OFFSET),
    (-RAY_OFFSET, -RAY_OFFSET),
    (RAY_OFFSET, -RAY_OFFSET),
];

/// Sampling step along the segment, in cell units.
const RAY_STEP: f32 = 0.05;

/// Straight-line probe over board occupancy.
///
/// Four parallel rays run corner to corner so that a tile clipping any
/// edge of the one-cell-wide corridor closes the path; a tile cannot
/// squeeze past a partial obstruction.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePath;

impl PathProbe for LinePath {
    fn is_open(&self, board: &Board, from: Coord, to: Coord) -> bool {
        let (x0, y0) = (f32::from(from.x), f32::from(from.y));
        let (dx, dy) = (f32::from(to.x) - x0, f32::from(to.y) - y0);
        let distance = (dx * dx + dy * dy).sqrt();
        if distance == 0.0 {
            return true;
        }

        let steps = (distance / RAY_STEP).ceil() as u32;
        for (ox, oy) in RAY_CORNERS {
            for step in 0..=steps {
                let t = step as f32 / steps as f32;
                let px = x0 + dx * t + ox;
                let py = y0 + dy * t + oy;
                let cell = Coord::new(px.round() as i8, py.round() as i8);
                if cell == from || cell == to {
                    continue;
                }
                if board.is_occupied(cell.x, cell.y) {
                    return false;
                }
            }
        }
        true
    }
}
