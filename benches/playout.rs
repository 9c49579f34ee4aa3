use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ludo_engine::rules::position::advance;
use ludo_engine::{Color, LudoEngine, Position};

fn play_out(seed: u64) -> LudoEngine {
    let mut engine = LudoEngine::with_seed(seed);
    while !engine.is_game_over() {
        let Ok(outcome) = engine.roll_dice() else { break };
        if let Some(&piece) = outcome.legal_moves.first() {
            let _ = engine.apply_move(piece);
        }
    }
    engine
}

fn bench_full_game(c: &mut Criterion) {
    let mut seed = 0;
    c.bench_function("full_game", |b| {
        b.iter(|| {
            seed += 1;
            black_box(play_out(seed))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = play_out(7);

    c.bench_function("snapshot_finished_game", |b| {
        b.iter(|| black_box(engine.snapshot()))
    });
}

fn bench_advance(c: &mut Criterion) {
    c.bench_function("advance_all_cells", |b| {
        b.iter(|| {
            for color in Color::ALL {
                for cell in 1..=52 {
                    for roll in 1..=6 {
                        black_box(advance(black_box(Position::OnTrack(cell)), roll, color));
                    }
                }
            }
        })
    });
}

criterion_group!(benches, bench_full_game, bench_snapshot, bench_advance);
criterion_main!(benches);
