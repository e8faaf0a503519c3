//! Level module - decoded level and piece descriptions
//!
//! The original asset pipeline derives boolean grids from textures; this
//! crate accepts the already-decoded form: rows of characters, one per
//! cell, deserializable from JSON. The char-to-kind table here plays the
//! role of the pipeline's pixel-color table.
//!
//! Level rows: `.` open cell, `#` goal cell, `O` hole cell.
//! Piece rows: `.` empty, `b` basic, `u` unbreakable, `x` burst, `g` gust.

use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{Board, Piece, Tile};
use crate::engine::Session;
use crate::types::TileKind;

/// A board description: goal and hole masks encoded as character rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(default)]
    pub name: Option<String>,
    pub rows: Vec<String>,
}

impl LevelData {
    /// Build the board, pre-placing hole tiles.
    pub fn build_board(&self) -> Result<Board> {
        ensure!(!self.rows.is_empty(), "level has no rows");
        let width = self.rows[0].chars().count();
        ensure!(width > 0, "level rows are empty");
        ensure!(
            width <= i8::MAX as usize && self.rows.len() <= i8::MAX as usize,
            "level dimensions exceed the coordinate range"
        );

        let height = self.rows.len();
        let mut goal = Vec::with_capacity(width * height);
        let mut hole = Vec::with_capacity(width * height);
        for (j, row) in self.rows.iter().enumerate() {
            ensure!(
                row.chars().count() == width,
                "level row {} has {} cells, expected {}",
                j,
                row.chars().count(),
                width
            );
            for (i, ch) in row.chars().enumerate() {
                match ch {
                    '.' => {
                        goal.push(false);
                        hole.push(false);
                    }
                    '#' => {
                        goal.push(true);
                        hole.push(false);
                    }
                    'O' => {
                        goal.push(false);
                        hole.push(true);
                    }
                    other => bail!("unknown level cell '{}' at ({}, {})", other, i, j),
                }
            }
        }
        Ok(Board::with_masks(width as u8, height as u8, goal, hole))
    }
}

/// A piece description: kind grid plus removal cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieceData {
    pub cost: u32,
    pub rows: Vec<String>,
}

impl PieceData {
    fn tile_for(ch: char) -> Result<Option<Tile>> {
        Ok(match ch {
            '.' => None,
            'b' => Some(Tile::new(TileKind::Basic)),
            'u' => Some(Tile::new(TileKind::Unbreakable)),
            'x' => Some(Tile::new(TileKind::Burst)),
            'g' => Some(Tile::new(TileKind::Gust)),
            other => bail!("unknown piece cell '{}'", other),
        })
    }

    /// Build the piece with the given roster id.
    pub fn build_piece(&self, id: u32) -> Result<Piece> {
        ensure!(!self.rows.is_empty(), "piece {} has no rows", id);
        let width = self.rows[0].chars().count();
        ensure!(width > 0, "piece {} rows are empty", id);
        ensure!(
            width <= i8::MAX as usize && self.rows.len() <= i8::MAX as usize,
            "piece {} dimensions exceed the coordinate range",
            id
        );

        let height = self.rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for (j, row) in self.rows.iter().enumerate() {
            ensure!(
                row.chars().count() == width,
                "piece {} row {} has {} cells, expected {}",
                id,
                j,
                row.chars().count(),
                width
            );
            for ch in row.chars() {
                tiles.push(Self::tile_for(ch).with_context(|| format!("piece {id}"))?);
            }
        }
        ensure!(
            tiles.iter().any(|cell| cell.is_some()),
            "piece {} has no tiles",
            id
        );
        Ok(Piece::new(id, self.cost, width as u8, height as u8, tiles))
    }
}

/// A full puzzle: one level plus its piece roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleData {
    pub level: LevelData,
    pub pieces: Vec<PieceData>,
}

impl PuzzleData {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("malformed puzzle JSON")
    }

    /// Build a playable session from the decoded data.
    pub fn build_session(&self) -> Result<Session> {
        let board = self.level.build_board()?;
        let pieces = self
            .pieces
            .iter()
            .enumerate()
            .map(|(index, data)| data.build_piece(index as u32 + 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(Session::new(board, pieces))
    }
}
