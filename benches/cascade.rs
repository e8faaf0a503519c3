use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polybreak::core::{Action, ActionQueue, Board, LinePath, OpenPath, PathProbe, Tile};
use polybreak::types::{Coord, TileKind};

/// Board fully tiled with bursts; breaking the center chains everywhere.
fn burst_field(size: u8) -> Board {
    let mut board = Board::new(size, size);
    for y in 0..size as i8 {
        for x in 0..size as i8 {
            board
                .place_at(Tile::new(TileKind::Burst), x, y)
                .expect("bench setup");
        }
    }
    board
}

fn bench_full_cascade(c: &mut Criterion) {
    c.bench_function("burst_cascade_16x16", |b| {
        b.iter(|| {
            let mut board = burst_field(16);
            let mut queue = ActionQueue::with_cooldown(0);
            queue.queue_action(Action::break_at(Coord::new(8, 8)));
            queue.run_to_idle(black_box(&mut board), &OpenPath);
        })
    });
}

fn bench_single_tick(c: &mut Criterion) {
    c.bench_function("queue_tick_64_actions", |b| {
        let mut board = burst_field(16);
        let mut queue = ActionQueue::with_cooldown(0);
        for y in 0..8 {
            for x in 0..8 {
                queue.queue_action(Action::break_at(Coord::new(x * 2, y * 2)));
            }
        }
        b.iter(|| {
            queue.tick(black_box(&mut board), &OpenPath);
        })
    });
}

fn bench_line_path(c: &mut Criterion) {
    let mut board = Board::new(16, 16);
    board
        .place_at(Tile::new(TileKind::Basic), 0, 8)
        .expect("bench setup");
    c.bench_function("line_path_15_cells", |b| {
        b.iter(|| {
            LinePath.is_open(
                black_box(&board),
                Coord::new(0, 8),
                Coord::new(15, 8),
            )
        })
    });
}

criterion_group!(benches, bench_full_cascade, bench_single_tick, bench_line_path);
criterion_main!(benches);
