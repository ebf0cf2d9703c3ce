use std::fmt::Display;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

use bg_ratings::model::{
    dedup::dedup,
    global_rank::merge_regions,
    placement::calculate_placements,
    structures::{entity_key::EntityKey, game_mode::GameMode, leaderboard_row::LeaderboardRow, region::Region}
};
use bg_ratings::utils::test_utils::{generate_snapshots, test_key};

#[derive(Debug, Clone)]
struct TestInput {
    lists: Vec<Vec<LeaderboardRow>>
}

impl Display for TestInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rows: {}", self.lists.iter().map(Vec::len).sum::<usize>())
    }
}

fn region_lists(rows_per_region: usize, rng: &mut ChaCha8Rng) -> TestInput {
    let lists = Region::iter()
        .map(|region| {
            let mut ratings: Vec<i32> = (0..rows_per_region).map(|_| rng.random_range(4000..12_000)).collect();
            ratings.sort_unstable_by(|a, b| b.cmp(a));

            ratings
                .into_iter()
                .enumerate()
                .map(|(i, rating)| {
                    let key = EntityKey::new(format!("{region}-{i}"), region, GameMode::Solo);
                    LeaderboardRow::new(key, rating, i as u32 + 1, 100)
                })
                .collect()
        })
        .collect();

    TestInput { lists }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(727);

    let mut group = c.benchmark_group("merge_regions");
    for rows in [200, 1000, 5000] {
        let input = region_lists(rows, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(&input), &input, |b, input| {
            b.iter(|| merge_regions(input.lists.clone()))
        });
    }
    group.finish();

    let series = generate_snapshots(&test_key(), 10_000, 727);
    c.bench_function("dedup 10k", |b| b.iter(|| dedup(&series)));

    let ratings: Vec<i32> = series.iter().map(|s| s.rating).collect();
    c.bench_function("calculate_placements 10k", |b| b.iter(|| calculate_placements(&ratings)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
