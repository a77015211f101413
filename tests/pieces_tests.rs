//! Piece and collision tests - shapes, spawn, kicks

use quadfall::core::{
    can_place, drop_to_floor, occupied_cells, resolve_move, resolve_rotation, Grid, KickTable,
    Piece, Spin,
};
use quadfall::types::{PieceKind, Rotation};

#[test]
fn test_occupied_cells_is_pure() {
    let a = occupied_cells(PieceKind::T, Rotation::East, (5, 2));
    let b = occupied_cells(PieceKind::T, Rotation::East, (5, 2));
    assert_eq!(a, b);
    assert_eq!(a, [(5, 3), (6, 3), (6, 4), (7, 3)]);
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let north = occupied_cells(PieceKind::O, Rotation::North, (0, 3));
    for rotation in [Rotation::East, Rotation::South, Rotation::West] {
        assert_eq!(occupied_cells(PieceKind::O, rotation, (0, 3)), north);
    }
}

#[test]
fn test_i_states_follow_srs_box() {
    let cells = |r| occupied_cells(PieceKind::I, r, (0, 0));
    assert_eq!(cells(Rotation::North), [(1, 0), (1, 1), (1, 2), (1, 3)]);
    assert_eq!(cells(Rotation::East), [(0, 2), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(cells(Rotation::South), [(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert_eq!(cells(Rotation::West), [(0, 1), (1, 1), (2, 1), (3, 1)]);
}

#[test]
fn test_spawn_fits_on_empty_grids() {
    for cols in [4u8, 7, 10, 15] {
        let grid = Grid::new(cols, 20);
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind, cols as usize);
            assert!(
                can_place(&grid, kind, piece.rotation, piece.anchor()),
                "{kind:?} on {cols} columns"
            );
        }
    }
}

#[test]
fn test_moves_stop_at_walls() {
    let grid = Grid::new(10, 20);
    let mut piece = Piece::spawn(PieceKind::I, 10);
    let mut steps = 0;
    while let Some(next) = resolve_move(&grid, &piece, 0, 1) {
        piece = next;
        steps += 1;
    }
    assert_eq!(steps, 3);
    assert_eq!(piece.cells()[3].1, 9);
}

#[test]
fn test_rotation_rejected_in_a_sealed_pocket() {
    let mut grid = Grid::new(10, 20);
    let piece = Piece::spawn(PieceKind::T, 10);
    let own = piece.cells();
    let cells: Vec<_> = (0..20)
        .flat_map(|row| (0..10).map(move |col| (row, col)))
        .filter(|cell| !own.contains(cell))
        .map(|(row, col)| (row, col, PieceKind::Z))
        .collect();
    grid.lock_cells(&cells);

    for spin in [Spin::Clockwise, Spin::CounterClockwise] {
        for table in [KickTable::Srs, KickTable::Basic, KickTable::None] {
            assert_eq!(resolve_rotation(&grid, &piece, spin, table), None);
        }
    }
}

#[test]
fn test_basic_kicks_step_off_wall() {
    let grid = Grid::new(10, 20);
    // Vertical T against the left wall; rotating back needs column 0 - 1.
    let piece = Piece::new(PieceKind::T, Rotation::East, 5, -1);
    assert!(piece.cells().iter().all(|&(_, c)| c >= 0));

    let rotated = resolve_rotation(&grid, &piece, Spin::Clockwise, KickTable::Basic).unwrap();
    assert_eq!(rotated.rotation, Rotation::South);
    assert_eq!(rotated.col, 0);
}

#[test]
fn test_drop_to_floor_on_empty_grid() {
    let grid = Grid::new(10, 20);
    for kind in PieceKind::ALL {
        let landed = drop_to_floor(&grid, &Piece::spawn(kind, 10));
        let bottom = landed.cells().iter().map(|&(r, _)| r).max().unwrap();
        assert_eq!(bottom, 19, "{kind:?}");
    }
}
