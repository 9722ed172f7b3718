use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{collides, Grid, Piece, SimConfig, Simulation};
use blockfall::types::{GameEvent, PieceKind, GREEN};

fn bench_tick(c: &mut Criterion) {
    let mut sim = Simulation::new(SimConfig::with_seed(12345));

    c.bench_function("sim_tick", |b| {
        b.iter(|| {
            if sim.is_game_over() {
                sim = Simulation::new(SimConfig::with_seed(12345));
            }
            black_box(sim.tick(black_box(&[GameEvent::MoveLeft])));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                grid.fill_row(y, GREEN);
            }
            grid.clear_full_lines()
        })
    });
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| {
        b.iter(|| Simulation::new(black_box(SimConfig::with_seed(12345))))
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut grid = Grid::new();
    for y in 10..20 {
        grid.fill_row(y, GREEN);
        grid.set((y % 10) as i8, y as i8, None);
    }
    let piece = Piece::spawn(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&piece), &grid, 0, black_box(1)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let piece = Piece::spawn(PieceKind::L);

    c.bench_function("rotate", |b| b.iter(|| black_box(&piece).rotated()));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_new_game,
    bench_collides,
    bench_rotate
);
criterion_main!(benches);
