use criterion::{criterion_group, criterion_main, Criterion, black_box};
use piebot_opponent::search::{SearchParams, Searcher};
use piebot_opponent::Position;

fn bench_search(c: &mut Criterion) {
    let start = Position::startpos();
    c.bench_function("minimax_depth_2_startpos", |ben| {
        ben.iter(|| {
            let mut pos = start.clone();
            let mut s = Searcher::new();
            let r = s.search(black_box(&mut pos), SearchParams::new(2, false));
            black_box(r.nodes)
        })
    });
    c.bench_function("alphabeta_depth_4_startpos", |ben| {
        ben.iter(|| {
            let mut pos = start.clone();
            let mut s = Searcher::new();
            let r = s.search(black_box(&mut pos), SearchParams::new(4, true));
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
