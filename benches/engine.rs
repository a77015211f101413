use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadfall::core::{Engine, GameConfig, Grid, PieceGenerator, Randomizer};
use quadfall::types::{Intent, PieceKind};

fn seeded() -> Engine {
    Engine::new(GameConfig::default().with_seed(12345)).unwrap()
}

fn bench_advance_16ms(c: &mut Criterion) {
    let mut engine = seeded();
    c.bench_function("advance_time_16ms", |b| {
        b.iter(|| {
            engine.advance_time(black_box(16));
            if engine.is_game_over() {
                engine.reset();
            }
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 20);
            let cells: Vec<_> = (16..20)
                .flat_map(|row| (0..10).map(move |col| (row, col, PieceKind::I)))
                .collect();
            grid.lock_cells(&cells);
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut engine = seeded();
    let intents = [Intent::MoveLeft, Intent::RotateCw, Intent::MoveRight, Intent::RotateCcw];
    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            for intent in intents {
                black_box(engine.submit_intent(intent));
            }
        })
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            let mut engine = seeded();
            while !engine.is_game_over() {
                engine.submit_intent(Intent::HardDrop);
                engine.advance_time(200);
            }
            black_box(engine.score())
        })
    });
}

fn bench_bag_draws(c: &mut Criterion) {
    let mut generator = PieceGenerator::seeded(Randomizer::Bag, 7);
    c.bench_function("bag_next", |b| b.iter(|| black_box(generator.next())));
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = seeded();
    c.bench_function("snapshot", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(
    benches,
    bench_advance_16ms,
    bench_clear_four_rows,
    bench_move_and_rotate,
    bench_hard_drop_game,
    bench_bag_draws,
    bench_snapshot
);
criterion_main!(benches);
