//! Read-only render input
//!
//! A snapshot is an owned copy of everything a shell needs to draw one frame.
//! It carries no timers and no references into the engine.

use arrayvec::ArrayVec;

use crate::pieces::{Piece, PieceCells};
use crate::stats::PieceStats;
use crate::types::{Cell, PieceKind, Phase, Rotation, MAX_PREVIEW};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i32,
    pub col: i32,
    pub cells: PieceCells,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cols: usize,
    pub rows: usize,
    /// Locked cells, row-major
    pub grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Where the active piece would land on a hard drop
    pub ghost: Option<PieceCells>,
    pub next: PieceKind,
    pub next_queue: ArrayVec<PieceKind, MAX_PREVIEW>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    pub paused: bool,
    pub stats: PieceStats,
}

impl GameSnapshot {
    /// Locked cell at `(row, col)`; out-of-bounds reads as empty
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.grid[row * self.cols + col]
    }

    /// Locked cell, or the active piece if it covers `(row, col)`
    pub fn visible_cell(&self, row: usize, col: usize) -> Cell {
        let covered = self.active.as_ref().and_then(|active| {
            active
                .cells
                .iter()
                .any(|&(r, c)| r == row as i32 && c == col as i32)
                .then_some(active.kind)
        });
        covered.or_else(|| self.cell(row, col))
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        !self.is_game_over() && !self.paused
    }
}
