//! Pieces module - tetromino shapes and the active piece value
//!
//! Shapes follow the Super Rotation System (SRS) rotation states, each laid out
//! inside a 4x4 bounding box. Offsets are `(row, col)` from the top-left corner
//! of that box, which is the piece's anchor.
//! Reference: https://tetris.wiki/SRS

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino from the piece anchor, `(row, col)`
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Absolute grid cells covered by a piece, `(row, col)`
pub type PieceCells = [(i32, i32); 4];

/// Get the mino offsets for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => [(0, 1), (0, 2), (1, 1), (1, 2)],
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        // N: horizontal on row 1
        Rotation::North => [(1, 0), (1, 1), (1, 2), (1, 3)],
        // E: vertical on column 2
        Rotation::East => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // S: horizontal on row 2
        Rotation::South => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // W: vertical on column 1
        Rotation::West => [(0, 1), (1, 1), (2, 1), (3, 1)],
    }
}

fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 1), (1, 0), (1, 1), (1, 2)],
        Rotation::East => [(0, 1), (1, 1), (1, 2), (2, 1)],
        Rotation::South => [(1, 0), (1, 1), (1, 2), (2, 1)],
        Rotation::West => [(0, 1), (1, 0), (1, 1), (2, 1)],
    }
}

fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 1), (0, 2), (1, 0), (1, 1)],
        Rotation::East => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(1, 1), (1, 2), (2, 0), (2, 1)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (2, 1)],
    }
}

fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (1, 2)],
        Rotation::East => [(0, 2), (1, 1), (1, 2), (2, 1)],
        Rotation::South => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(0, 1), (1, 0), (1, 1), (2, 0)],
    }
}

fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (1, 2)],
        Rotation::East => [(0, 1), (0, 2), (1, 1), (2, 1)],
        Rotation::South => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(0, 1), (1, 1), (2, 0), (2, 1)],
    }
}

fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 2), (1, 0), (1, 1), (1, 2)],
        Rotation::East => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 0), (1, 1), (1, 2), (2, 0)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (2, 1)],
    }
}

/// Grid cells covered by `kind` in `rotation` with its box anchored at `anchor`
///
/// Pure: the same inputs always give the same cells, so it can be called
/// speculatively while validating a move.
pub fn occupied_cells(kind: PieceKind, rotation: Rotation, anchor: (i32, i32)) -> PieceCells {
    let (row, col) = anchor;
    get_shape(kind, rotation).map(|(dr, dc)| (row + dr as i32, col + dc as i32))
}

/// A tetromino with a rotation and an anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    pub fn new(kind: PieceKind, rotation: Rotation, row: i32, col: i32) -> Self {
        Self {
            kind,
            rotation,
            row,
            col,
        }
    }

    /// Canonical spawn state: North, top row, box centred on the grid
    ///
    /// On a 10-wide grid the box starts at column 3, so the I piece covers
    /// columns 3..=6 and the O piece columns 4..=5.
    pub fn spawn(kind: PieceKind, grid_cols: usize) -> Self {
        let col = (grid_cols as i32 - 4) / 2;
        Self::new(kind, Rotation::North, 0, col)
    }

    pub fn anchor(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    /// Cells covered at the current rotation and anchor
    pub fn cells(&self) -> PieceCells {
        occupied_cells(self.kind, self.rotation, self.anchor())
    }

    /// Same piece offset by `(d_row, d_col)`
    pub fn translated(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    /// Same anchor, rotation turned by `by` quarter turns (positive = clockwise)
    pub fn rotated(&self, by: i8) -> Self {
        Self {
            rotation: self.rotation.rotated(by),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn test_every_shape_has_four_distinct_minos_inside_box() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let shape = get_shape(kind, rotation);
                for (i, a) in shape.iter().enumerate() {
                    assert!((0..4).contains(&a.0) && (0..4).contains(&a.1));
                    for b in &shape[i + 1..] {
                        assert_ne!(a, b, "{kind:?} {rotation:?} repeats a mino");
                    }
                }
            }
        }
    }

    #[test]
    fn test_four_turns_return_to_start() {
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind, 10);
            let spun = piece.rotated(1).rotated(1).rotated(1).rotated(1);
            assert_eq!(spun, piece);
            assert_eq!(piece.rotated(-1), piece.rotated(3));
        }
    }

    #[test]
    fn test_spawn_positions() {
        let i = Piece::spawn(PieceKind::I, 10);
        assert_eq!(i.cells(), [(1, 3), (1, 4), (1, 5), (1, 6)]);

        let o = Piece::spawn(PieceKind::O, 10);
        assert_eq!(o.cells(), [(0, 4), (0, 5), (1, 4), (1, 5)]);

        // Narrowest legal grid keeps the box flush with the left edge.
        assert_eq!(Piece::spawn(PieceKind::T, 4).col, 0);
    }

    #[test]
    fn test_translated_is_pure_offset() {
        let piece = Piece::spawn(PieceKind::L, 10);
        let moved = piece.translated(2, -1);
        assert_eq!(moved.anchor(), (2, 2));
        assert_eq!(moved.rotation, piece.rotation);
        for (a, b) in piece.cells().iter().zip(moved.cells().iter()) {
            assert_eq!((a.0 + 2, a.1 - 1), *b);
        }
    }
}
