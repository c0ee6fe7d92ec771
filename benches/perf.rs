use std::fs;
use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use bsa_terminal::fetch::FetchOutcome;
use bsa_terminal::views::{build_fixtures, build_scorers, build_season_snapshot, build_standings};

fn fixture(name: &str) -> FetchOutcome {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    FetchOutcome::Success(serde_json::from_str(&raw).expect("valid fixture json"))
}

fn bench_builders(c: &mut Criterion) {
    let competition = fixture("competition.json");
    let standings = fixture("standings.json");
    let scorers = fixture("scorers.json");
    let matches = fixture("matches_day.json");

    c.bench_function("season_snapshot", |b| {
        b.iter(|| {
            black_box(build_season_snapshot(
                black_box(&competition),
                black_box(&standings),
                black_box(&scorers),
            ))
        })
    });
    c.bench_function("standings_table", |b| {
        b.iter(|| black_box(build_standings(black_box(&standings))))
    });
    c.bench_function("scorers_list", |b| {
        b.iter(|| black_box(build_scorers(black_box(&scorers))))
    });
    c.bench_function("fixtures_for_day", |b| {
        b.iter(|| black_box(build_fixtures(black_box(&matches))))
    });
}

criterion_group!(benches, bench_builders);
criterion_main!(benches);
