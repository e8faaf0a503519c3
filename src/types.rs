//! Core types shared across the simulation
//! This module contains pure data types with no external dependencies

/// Idle ticks inserted between two action batches.
///
/// Pacing only: a cooldown of zero produces the same final board state,
/// batches just resolve back to back.
pub const BATCH_COOLDOWN_TICKS: u8 = 2;

/// A cell coordinate on the board.
///
/// Signed so that cascade targets may fall outside the board and fail
/// at execution time instead of at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away along `delta`.
    pub fn offset(self, delta: MoveVec) -> Self {
        Self {
            x: self.x.saturating_add(delta.dx),
            y: self.y.saturating_add(delta.dy),
        }
    }
}

/// A push vector applied to a tile by a Move action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveVec {
    pub dx: i8,
    pub dy: i8,
}

impl MoveVec {
    pub const ZERO: MoveVec = MoveVec { dx: 0, dy: 0 };

    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Component-wise sum, saturating at the i8 limits.
    pub fn add(self, other: MoveVec) -> Self {
        Self {
            dx: self.dx.saturating_add(other.dx),
            dy: self.dy.saturating_add(other.dy),
        }
    }
}

/// The four orthogonal neighbor offsets, in left/right/down/up order.
pub const ORTHOGONAL: [MoveVec; 4] = [
    MoveVec::new(-1, 0),
    MoveVec::new(1, 0),
    MoveVec::new(0, -1),
    MoveVec::new(0, 1),
];

/// Tile variants (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Basic,
    Unbreakable,
    Burst,
    Gust,
    Hole,
}

impl TileKind {
    /// Parse tile kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" => Some(TileKind::Basic),
            "unbreakable" => Some(TileKind::Unbreakable),
            "burst" => Some(TileKind::Burst),
            "gust" => Some(TileKind::Gust),
            "hole" => Some(TileKind::Hole),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Basic => "basic",
            TileKind::Unbreakable => "unbreakable",
            TileKind::Burst => "burst",
            TileKind::Gust => "gust",
            TileKind::Hole => "hole",
        }
    }

    /// Whether a Break against this kind can ever succeed.
    pub fn breakable(&self) -> bool {
        !matches!(self, TileKind::Unbreakable | TileKind::Hole)
    }

    /// Default movability for the kind. Unbreakable tiles take an explicit
    /// flag at construction and may override this.
    pub fn default_movable(&self) -> bool {
        !matches!(self, TileKind::Hole)
    }

    /// Whether tiles of this kind are skipped by the win check by default.
    pub fn default_exempt(&self) -> bool {
        matches!(self, TileKind::Hole)
    }

    /// Cell code used by board snapshots (0 is reserved for empty cells).
    pub fn cell_code(&self) -> u8 {
        match self {
            TileKind::Basic => 1,
            TileKind::Unbreakable => 2,
            TileKind::Burst => 3,
            TileKind::Gust => 4,
            TileKind::Hole => 5,
        }
    }
}

/// Placement status of a cell as seen by a candidate tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStatus {
    /// The cell is already occupied (or out of bounds) and cannot take a tile.
    Unplaceable,
    /// The cell is free and part of the goal mask.
    Correct,
    /// The cell is free but not part of the goal mask.
    Incorrect,
}
