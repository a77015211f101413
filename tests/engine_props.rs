//! Property tests - invariants that must hold for any seed, input or timing.
//!
//! - Row compaction keeps every non-full row, in order.
//! - Bag draws hold each shape once per aligned window of seven.
//! - Splitting elapsed time over several calls changes nothing.
//! - Random play never overlaps the active piece with the stack.

use proptest::prelude::*;
use quadfall::core::{can_place, Engine, GameConfig, Grid, PieceGenerator, Randomizer};
use quadfall::types::{Intent, PieceKind, Phase};
use rand::rngs::StdRng;
use rand::SeedableRng;

const INTENTS: [Intent; 7] = [
    Intent::MoveLeft,
    Intent::MoveRight,
    Intent::RotateCw,
    Intent::RotateCcw,
    Intent::SoftDrop,
    Intent::HardDrop,
    Intent::Pause,
];

proptest! {
    #[test]
    fn clearing_keeps_partial_rows_in_order(
        rows in prop::collection::vec(prop::collection::vec(any::<bool>(), 6), 8),
    ) {
        let mut grid = Grid::new(6, 8);
        let cells: Vec<_> = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, filled)| **filled)
                    .map(move |(c, _)| (r as i32, c as i32, PieceKind::T))
            })
            .collect();
        grid.lock_cells(&cells);

        let full: Vec<usize> = (0..8).rev().filter(|&r| rows[r].iter().all(|f| *f)).collect();
        let kept: Vec<&Vec<bool>> = rows.iter().filter(|row| !row.iter().all(|f| *f)).collect();

        let cleared = grid.clear_full_rows();
        prop_assert_eq!(cleared.rows(), full.as_slice());

        let offset = full.len();
        for r in 0..offset {
            prop_assert!(grid.is_row_empty(r));
        }
        for (i, row) in kept.iter().enumerate() {
            let actual: Vec<bool> = grid.row(offset + i).unwrap().iter().map(|c| c.is_some()).collect();
            prop_assert_eq!(&actual, *row);
        }
    }

    #[test]
    fn bag_windows_hold_every_shape(seed in any::<u64>()) {
        let mut generator = PieceGenerator::seeded(Randomizer::Bag, seed);
        let draws: Vec<PieceKind> = (0..70).map(|_| generator.next()).collect();
        for window in draws.chunks(7) {
            let mut sorted = window.to_vec();
            sorted.sort();
            prop_assert_eq!(sorted, PieceKind::ALL.to_vec());
        }
        for kind in PieceKind::ALL {
            let positions: Vec<usize> = draws.iter().enumerate().filter(|(_, k)| **k == kind).map(|(i, _)| i).collect();
            for pair in positions.windows(2) {
                prop_assert!(pair[1] - pair[0] <= 13);
            }
        }
    }

    #[test]
    fn split_time_equals_one_call(
        seed in any::<u64>(),
        chunks in prop::collection::vec(1u32..3_000, 1..40),
    ) {
        let config = GameConfig::default().with_seed(seed);
        let mut whole = Engine::new(config.clone()).unwrap();
        let mut split = Engine::new(config).unwrap();

        whole.advance_time(chunks.iter().sum());
        for chunk in &chunks {
            split.advance_time(*chunk);
        }
        prop_assert_eq!(whole.snapshot(), split.snapshot());
    }

    #[test]
    fn random_play_respects_invariants(
        seed in any::<u64>(),
        moves in prop::collection::vec((0usize..INTENTS.len(), 0u32..600), 1..300),
        uniform in any::<bool>(),
    ) {
        let config = GameConfig {
            randomizer: if uniform { Randomizer::Uniform } else { Randomizer::Bag },
            ..GameConfig::default()
        };
        let mut engine = Engine::with_rng(config, StdRng::seed_from_u64(seed)).unwrap();
        let mut last_score = 0;
        let mut last_lines = 0;

        for (intent, elapsed) in moves {
            engine.submit_intent(INTENTS[intent]);
            engine.advance_time(elapsed);

            let phase = engine.phase();
            prop_assert_eq!(engine.active().is_some(), phase.has_active_piece());
            prop_assert_ne!(phase, Phase::Spawning);
            if let Some(piece) = engine.active() {
                prop_assert!(can_place(engine.grid(), piece.kind, piece.rotation, piece.anchor()));
            }
            prop_assert!(engine.score() >= last_score);
            prop_assert!(engine.lines() >= last_lines);
            prop_assert_eq!(engine.level(), engine.lines() / 10);
            for row in 0..engine.grid().row_count() {
                prop_assert!(!engine.grid().is_row_full(row));
            }
            last_score = engine.score();
            last_lines = engine.lines();
        }
    }
}
