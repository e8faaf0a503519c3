//! Polybreak - simulation core for a polyomino placement-and-break puzzle.
//!
//! Players place polyomino pieces on a grid, then must pay off a removal
//! quota by breaking existing tiles before placing again. Some tiles
//! react to breaking: Burst tiles break their neighbors, Gust tiles push
//! them outward. Reactions resolve through a double-buffered action queue
//! one generation per tick, so cascades stay deterministic and bounded.
//!
//! The crate is headless: rendering, input devices, asset decoding, and
//! physics belong to collaborator layers that drive the `engine::Session`
//! command surface and poll `core::BoardSnapshot`.

pub mod core;
pub mod engine;
pub mod level;
pub mod types;
