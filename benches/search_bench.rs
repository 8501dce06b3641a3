use criterion::{criterion_group, criterion_main, Criterion, black_box};
use othellobot::{Board, Color};

fn bench_search(c: &mut Criterion) {
    let b = Board::startpos();
    c.bench_function("search_depth_5_startpos", |ben| {
        ben.iter(|| {
            let mut s = othellobot::Searcher::default();
            let mut p = othellobot::SearchParams::default();
            p.depth = 5; p.time_limit_secs = None;
            let r = s.search(black_box(&b), Color::Black, &p);
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
