use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{
    is_valid_placement, move_piece, rotate_piece, Board, EngineState, Piece, SimpleRng, KIND_I,
    KIND_T,
};
use blockfall::types::{Cell, Command, Direction, GameConfig, Point};

fn bench_tick(c: &mut Criterion) {
    let state = EngineState::new(12345);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            black_box(state.on_tick());
        })
    });
}

fn bench_tick_landing(c: &mut Criterion) {
    // Piece already resting on the floor, so every tick lands and respawns.
    let grounded = Piece::new(KIND_T, 1, Point::new(3, 18), 0).unwrap();
    let state = EngineState::from_parts(GameConfig::default(), Board::new(9, 20), grounded, 7);

    c.bench_function("engine_tick_landing", |b| {
        b.iter(|| {
            black_box(state.on_tick());
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    // Bottom four rows full plus a scatter above them to shift down.
    let mut cells = Vec::new();
    for y in 16..20 {
        for x in 0..9 {
            cells.push(Cell::new(1, Point::new(x, y)));
        }
    }
    for x in 0..5 {
        cells.push(Cell::new(2, Point::new(x, 14)));
    }
    let board = Board::with_cells(9, 20, cells);

    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            black_box(board.clear_filled_rows());
        })
    });
}

fn bench_placement_check(c: &mut Criterion) {
    let mut cells = Vec::new();
    for y in 10..20 {
        for x in (0..9).step_by(2) {
            cells.push(Cell::new(0, Point::new(x, y)));
        }
    }
    let board = Board::with_cells(9, 20, cells);
    let piece = Piece::new(KIND_I, 0, Point::new(3, 8), 0).unwrap();

    c.bench_function("placement_check", |b| {
        b.iter(|| {
            black_box(is_valid_placement(&piece, &board));
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let board = Board::new(9, 20);
    let piece = Piece::new(KIND_T, 1, Point::new(3, 5), 0).unwrap();

    c.bench_function("move_right", |b| {
        b.iter(|| {
            black_box(move_piece(&piece, Direction::Right, &board));
        })
    });

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(rotate_piece(&piece, &board));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(Piece::spawn(&mut rng, &config));
        })
    });
}

fn bench_command_dispatch(c: &mut Criterion) {
    let state = EngineState::new(12345);

    c.bench_function("command_left", |b| {
        b.iter(|| {
            black_box(state.on_command(Command::Left));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_tick_landing,
    bench_clear_rows,
    bench_placement_check,
    bench_move_and_rotate,
    bench_spawn,
    bench_command_dispatch
);
criterion_main!(benches);
