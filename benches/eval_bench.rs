use criterion::{criterion_group, criterion_main, Criterion, black_box};
use piebot_opponent::Position;

fn bench_eval(c: &mut Criterion) {
    let start = Position::startpos();
    c.bench_function("evaluate_startpos", |ben| {
        ben.iter(|| {
            let v = piebot_opponent::search::eval::evaluate(black_box(&start));
            black_box(v)
        })
    });
    let mid = Position::from_fen("r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP2BPPP/R2QKB1R w KQ - 0 8").unwrap();
    c.bench_function("evaluate_middlegame", |ben| {
        ben.iter(|| black_box(piebot_opponent::search::eval::evaluate(black_box(&mid))))
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
