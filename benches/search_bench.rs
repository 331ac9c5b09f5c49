use criterion::{black_box, criterion_group, criterion_main, Criterion};
use draughtbot::board::{Board, Color};
use draughtbot::search::alphabeta::Engine;

fn bench_search(c: &mut Criterion) {
    let b = Board::new();
    c.bench_function("search_depth_5_startpos", |ben| {
        ben.iter(|| {
            let mut engine = Engine::new(Color::White, 5);
            let mv = engine.get_best_move(black_box(&b));
            black_box((mv, engine.nodes()))
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
