//! Shared types - plain data used by the core, the shells and the tests
//!
//! All types here are simple data with no game logic beyond conversions, so any
//! host (terminal shell, GUI, headless test) can depend on them cheaply.
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs. Row 0 is the top of the grid and rows grow
//! downward; column 0 is the leftmost column.
//!
//! # Default timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Shell timing loop interval (~60 FPS) |
//! | `LOCK_DELAY_MS` | 450 | Grace period before a grounded piece locks |
//! | `LOCK_RESET_LIMIT` | 15 | Lock timer resets allowed per piece |
//! | `SOFT_DROP_FACTOR` | 10 | Soft drop divides the gravity interval by this |
//! | `LINE_CLEAR_PAUSE_MS` | 180 | Pause after a clear before the next spawn |
//!
//! # Examples
//!
//! ```
//! use quadfall_types::{PieceKind, Rotation};
//!
//! assert_eq!(PieceKind::from_letter('t'), Some(PieceKind::T));
//! assert_eq!(Rotation::North.rotated(-1), Rotation::West);
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! ```

use serde::{Deserialize, Serialize};

/// Default grid width in cells
pub const DEFAULT_WIDTH: u8 = 10;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: u8 = 20;

/// Smallest accepted grid dimension (a vertical I needs four rows)
pub const MIN_DIMENSION: u8 = 4;

/// Number of distinct tetromino shapes
pub const SHAPE_COUNT: usize = 7;

/// Longest next-piece preview a snapshot can carry
pub const MAX_PREVIEW: usize = 5;

/// Shell timing loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Lock delay when a piece is grounded
pub const LOCK_DELAY_MS: u32 = 450;

/// Maximum number of lock timer resets per piece
pub const LOCK_RESET_LIMIT: u8 = 15;

/// Soft drop gravity is the level's interval divided by this
pub const SOFT_DROP_FACTOR: u32 = 10;

/// Pause after clearing lines before the next piece spawns
pub const LINE_CLEAR_PAUSE_MS: u32 = 180;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity intervals by level (milliseconds per row)
///
/// Index 0 = level 0. Levels past the end use the last entry.
pub const DROP_INTERVALS: [u32; 10] = [1000, 800, 650, 500, 400, 320, 250, 200, 160, 120];

/// Line clear scoring table (classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino shapes
///
/// - **I**: cyan bar
/// - **O**: yellow square
/// - **T**: magenta
/// - **S**: green
/// - **Z**: red (mirror of S)
/// - **J**: blue
/// - **L**: orange (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every shape, in declaration order. A fresh bag starts from this.
    pub const ALL: [PieceKind; SHAPE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Stable index in `0..SHAPE_COUNT`
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Parse a shape letter (case-insensitive)
    ///
    /// ```
    /// use quadfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_letter('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_letter('x'), None);
    /// ```
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase shape letter
    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// Rotation states (SRS naming)
///
/// The cycle goes North → East → South → West → North, where North is the
/// spawn orientation and East is one clockwise turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in `0..4`
    pub fn index(self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for an index, wrapping modulo 4
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate by a signed number of quarter turns (positive = clockwise)
    pub fn rotated(self, by: i8) -> Self {
        let turns = by.rem_euclid(4) as u8;
        Self::from_index(self.index() + turns)
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(self) -> Self {
        self.rotated(1)
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(self) -> Self {
        self.rotated(-1)
    }
}

/// Player-issued requests, consumed within one tick
///
/// Intents that do not apply in the current phase are ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move the piece one column left
    MoveLeft,
    /// Move the piece one column right
    MoveRight,
    /// Rotate 90° clockwise (with kicks)
    RotateCw,
    /// Rotate 90° counter-clockwise (with kicks)
    RotateCcw,
    /// Drop one row now and fall faster for the rest of this piece
    SoftDrop,
    /// Drop to the lowest legal row and lock immediately
    HardDrop,
    /// Toggle pause/resume
    Pause,
}

/// Engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// About to draw the next piece
    Spawning,
    /// Active piece is falling under gravity
    Falling,
    /// Active piece is blocked below; lock delay is running
    Locking,
    /// Piece merged; full rows being cleared and scored
    LineClear,
    /// Spawn was blocked; terminal until reset
    GameOver,
}

impl Phase {
    /// Whether an active piece exists in this phase
    pub fn has_active_piece(self) -> bool {
        matches!(self, Phase::Falling | Phase::Locking)
    }
}

/// A grid cell: `None` is empty, `Some(kind)` is a locked block of that shape
pub type Cell = Option<PieceKind>;
