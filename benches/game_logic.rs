use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameEngine};
use blockfall::types::{GameCommand, PieceKind, Rotation};

fn bench_advance(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.apply(GameCommand::Start);

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            engine.advance(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_spawn_piece(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.apply(GameCommand::Start);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            engine.spawn_piece();
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.apply(GameCommand::Start);

    c.bench_function("can_place", |b| {
        b.iter(|| {
            let fits = engine.can_place(black_box(1), black_box(0), black_box(Rotation::North));
            black_box(fits);
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.apply(GameCommand::Start);

    c.bench_function("shift", |b| {
        b.iter(|| {
            engine.apply(GameCommand::MoveLeft);
            engine.apply(GameCommand::MoveRight);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.apply(GameCommand::Start);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            engine.apply(GameCommand::RotateCw);
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_spawn_piece,
    bench_can_place,
    bench_shift,
    bench_rotate
);
criterion_main!(benches);
