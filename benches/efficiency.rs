// benches/efficiency.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use vleague_stats::{
    stats::{ compute_efficiency, merge, Position, RoleLabel, RoleRules, RosterEntry, StatEntry },
    table::{ Column, SortOrder, TableData, ALL_COLUMNS },
};

/// A synthetic league: 12 teams × 16 players, stats listed in reverse order.
fn synthetic(n: usize) -> (Vec<RosterEntry>, Vec<StatEntry>) {
    let roster: Vec<RosterEntry> = (0..n)
        .map(|i| RosterEntry {
            name: format!("Player {i:04}"),
            team: format!("Team {}", i % 12),
            position: Position::ALL[i % Position::ALL.len()],
            height_cm: Some(170.0 + (i % 30) as f64),
            weight_kg: Some(65.0 + (i % 25) as f64),
            reception_success_pct: Some((i % 80) as f64),
        })
        .collect();
    let stats: Vec<StatEntry> = (0..n)
        .rev()
        .map(|i| {
            let k = i as u32;
            StatEntry {
                name: format!("Player {i:04}"),
                sets_played: k % 40,
                attack_points: (k * 7) % 250,
                attack_errors: (k * 3) % 30,
                attack_attempts: (k * 13) % 600,
                block_points: (k * 5) % 60,
                service_points: k % 20,
                service_errors: (k * 2) % 25,
            }
        })
        .collect();
    (roster, stats)
}

fn bench_pipeline(c: &mut Criterion) {
    let (roster, stats) = synthetic(12 * 16);
    let rows = merge(&roster, &stats).expect("unique names");
    let records = compute_efficiency(&rows);
    let rules = RoleRules::with_serving_threat();

    c.bench_function("merge", |b| {
        b.iter(|| {
            let rows = merge(black_box(&roster), black_box(&stats)).expect("unique names");
            black_box(rows.len())
        })
    });

    c.bench_function("compute_efficiency", |b| {
        b.iter(|| {
            let recs = compute_efficiency(black_box(&rows));
            black_box(recs.len())
        })
    });

    c.bench_function("classify_all", |b| {
        b.iter(|| {
            let n = records.iter().map(|r| rules.classify(black_box(r))).filter(|l| *l != RoleLabel::NoData).count();
            black_box(n)
        })
    });

    c.bench_function("table_build_all_columns", |b| {
        b.iter(|| {
            let t = TableData::build(black_box(&records), &rules, &ALL_COLUMNS, Column::NetPointsPerSet, SortOrder::Descending);
            black_box(t.nrows())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
