//! Collision and wall-kick resolution
//!
//! Every candidate placement is checked against the grid before it is
//! committed. Rotations try an ordered list of kick offsets; the first legal one
//! wins and a rotation with no legal kick leaves the piece untouched.
//!
//! Kick offsets are stored as `(d_row, d_col)` in grid coordinates, where a
//! negative `d_row` moves the piece up. The SRS tables below are the published
//! tables with their vertical component flipped for the downward row axis.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::pieces::{occupied_cells, Piece};
use crate::types::{PieceKind, Rotation};

/// Direction of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    /// Quarter turns applied by this spin
    pub fn turns(self) -> i8 {
        match self {
            Spin::Clockwise => 1,
            Spin::CounterClockwise => -1,
        }
    }
}

/// Which kick table rotations use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KickTable {
    /// Super Rotation System kicks (JLSTZ shared, I separate, O none)
    #[default]
    Srs,
    /// In place, one column left, one column right, one row up
    Basic,
    /// In place only
    None,
}

/// Five kick offsets tried in order for one rotation transition
pub type KickList = [(i8, i8); 5];

/// Transition rows are indexed by [`kick_index`]
type KickRows = [KickList; 8];

/// O piece never needs kicks
const O_KICKS: [(i8, i8); 1] = [(0, 0)];

const NO_KICKS: [(i8, i8); 1] = [(0, 0)];

const BASIC_KICKS: [(i8, i8); 4] = [(0, 0), (0, -1), (0, 1), (-1, 0)];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickRows = [
    // 0->1 (N->E)
    [(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)],
    // 0->3 (N->W)
    [(0, 0), (0, 1), (-1, 1), (2, 0), (2, 1)],
    // 1->0 (E->N)
    [(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)],
    // 1->2 (E->S)
    [(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)],
    // 2->1 (S->E)
    [(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)],
    // 2->3 (S->W)
    [(0, 0), (0, 1), (-1, 1), (2, 0), (2, 1)],
    // 3->2 (W->S)
    [(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)],
    // 3->0 (W->N)
    [(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)],
];

/// I piece kick table
const I_KICKS: KickRows = [
    // 0->1 (N->E)
    [(0, 0), (0, -2), (0, 1), (1, -2), (-2, 1)],
    // 0->3 (N->W)
    [(0, 0), (0, -1), (0, 2), (-2, -1), (1, 2)],
    // 1->0 (E->N)
    [(0, 0), (0, 2), (0, -1), (-1, 2), (2, -1)],
    // 1->2 (E->S)
    [(0, 0), (0, -1), (0, 2), (-2, -1), (1, 2)],
    // 2->1 (S->E)
    [(0, 0), (0, 1), (0, -2), (2, 1), (-1, -2)],
    // 2->3 (S->W)
    [(0, 0), (0, 2), (0, -1), (-1, 2), (2, -1)],
    // 3->2 (W->S)
    [(0, 0), (0, -2), (0, 1), (1, -2), (-2, 1)],
    // 3->0 (W->N)
    [(0, 0), (0, 1), (0, -2), (2, 1), (-1, -2)],
];

/// Row of the SRS tables for a transition
fn kick_index(from: Rotation, spin: Spin) -> usize {
    match (from, spin) {
        (Rotation::North, Spin::Clockwise) => 0,
        (Rotation::North, Spin::CounterClockwise) => 1,
        (Rotation::East, Spin::CounterClockwise) => 2,
        (Rotation::East, Spin::Clockwise) => 3,
        (Rotation::South, Spin::CounterClockwise) => 4,
        (Rotation::South, Spin::Clockwise) => 5,
        (Rotation::West, Spin::CounterClockwise) => 6,
        (Rotation::West, Spin::Clockwise) => 7,
    }
}

impl KickTable {
    /// Ordered kick offsets for rotating `kind` out of `from`
    ///
    /// The first entry is always `(0, 0)`, the unkicked rotation.
    pub fn kicks(self, kind: PieceKind, from: Rotation, spin: Spin) -> &'static [(i8, i8)] {
        match (self, kind) {
            (_, PieceKind::O) => &O_KICKS,
            (KickTable::None, _) => &NO_KICKS,
            (KickTable::Basic, _) => &BASIC_KICKS,
            (KickTable::Srs, PieceKind::I) => &I_KICKS[kick_index(from, spin)],
            (KickTable::Srs, _) => &JLSTZ_KICKS[kick_index(from, spin)],
        }
    }
}

/// True iff every cell of the placement is inside the grid and empty
pub fn can_place(grid: &Grid, kind: PieceKind, rotation: Rotation, anchor: (i32, i32)) -> bool {
    occupied_cells(kind, rotation, anchor)
        .iter()
        .all(|&(row, col)| grid.is_free(row, col))
}

fn fits(grid: &Grid, piece: &Piece) -> bool {
    can_place(grid, piece.kind, piece.rotation, piece.anchor())
}

/// Single translation attempt, no kicks
pub fn resolve_move(grid: &Grid, piece: &Piece, d_row: i32, d_col: i32) -> Option<Piece> {
    let moved = piece.translated(d_row, d_col);
    fits(grid, &moved).then_some(moved)
}

/// Rotate with kicks; `None` means every kick was blocked
pub fn resolve_rotation(grid: &Grid, piece: &Piece, spin: Spin, table: KickTable) -> Option<Piece> {
    let turned = piece.rotated(spin.turns());
    table
        .kicks(piece.kind, piece.rotation, spin)
        .iter()
        .map(|&(dr, dc)| turned.translated(dr as i32, dc as i32))
        .find(|candidate| fits(grid, candidate))
}

/// Lowest legal position straight below `piece`
///
/// Applies single-row moves until one fails. Terminates because the grid has
/// finitely many rows.
pub fn drop_to_floor(grid: &Grid, piece: &Piece) -> Piece {
    let mut current = *piece;
    while let Some(next) = resolve_move(grid, &current, 1, 0) {
        current = next;
    }
    current
}

/// Whether the piece cannot move one row down
pub fn is_grounded(grid: &Grid, piece: &Piece) -> bool {
    resolve_move(grid, piece, 1, 0).is_none()
}
