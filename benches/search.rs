use std::time::Duration;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use hackenbush::core::{Color, Convention, Edge, Player};
use hackenbush::position::Position;
use hackenbush::search::{AlphaBetaSearch, SearchConfig};
use hackenbush::valuation::ColonValuation;

/// A small forest: `stalks` stalks of three edges, cycling through colors.
fn forest(stalks: usize) -> Position {
    let colors = [Color::Blue, Color::Red, Color::Green];
    let edges = (0..stalks).flat_map(|s| {
        (0..3).map(move |level| {
            let lower = if level == 0 {
                "ground".to_string()
            } else {
                format!("s{}v{}", s, level)
            };
            let color = colors[(s + level) % colors.len()];
            Edge::new(format!("s{}e{}", s, level), lower, format!("s{}v{}", s, level + 1), color)
        })
    });
    Position::new(edges).expect("forest is connected")
}

fn bench_alphabeta(c: &mut Criterion) {
    let mut group = c.benchmark_group("Alpha-Beta");
    group
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));

    for stalks in [2, 3] {
        let position = forest(stalks);
        for convention in [Convention::Normal, Convention::Misere] {
            let search = AlphaBetaSearch::new(convention, SearchConfig::default());
            group.bench_with_input(
                BenchmarkId::new(convention.to_string(), position.len()),
                &position,
                |b, position| b.iter(|| black_box(search.search(position, Player::Blue))),
            );
        }
    }
    group.finish();
}

fn bench_colon(c: &mut Criterion) {
    let edges = (0..40).map(|i| {
        let color = if i % 3 == 0 { Color::Red } else { Color::Blue };
        let lower = if i == 0 { "ground".to_string() } else { format!("v{}", i) };
        Edge::new(format!("e{}", i), lower, format!("v{}", i + 1), color)
    });
    let position = Position::new(edges).expect("stalk is connected");

    c.bench_function("colon analyze (40-edge stalk)", |b| {
        b.iter(|| black_box(ColonValuation.analyze_for(&position, Player::Blue)))
    });
}

criterion_group!(benches, bench_alphabeta, bench_colon);
criterion_main!(benches);
