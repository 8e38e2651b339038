// benches/reconcile.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nyc_procurement::{
    data::{ResultSet, ResultSetId},
    matching::{FuzzyScores, LinkOptions, link_records},
    selection::{SelectedCollection, SelectionSnapshot, reconcile},
};

fn sample(n: usize) -> ResultSet {
    let rows = (0..n)
        .map(|i| vec![format!("AG{}", i % 40), format!("Service description number {i}")])
        .collect();
    ResultSet::new(ResultSetId::new(1), vec!["Agency".into(), "Services Descrption".into()], rows)
}

fn bench_reconcile(c: &mut Criterion) {
    let rs = sample(5_000);
    let every_third: SelectionSnapshot = (0..rs.len()).step_by(3).collect();
    let every_fifth: SelectionSnapshot = (0..rs.len()).step_by(5).collect();

    // Steady state: the per-frame call with nothing changed.
    c.bench_function("reconcile_noop_5k", |b| {
        let mut selected = SelectedCollection::new();
        reconcile(&SelectionSnapshot::new(), &every_third, &rs, &mut selected);
        b.iter(|| {
            let out = reconcile(black_box(&every_third), black_box(&every_third), &rs, &mut selected);
            black_box(out.is_noop())
        })
    });

    c.bench_function("reconcile_swap_5k", |b| {
        b.iter(|| {
            let mut selected = SelectedCollection::new();
            reconcile(&SelectionSnapshot::new(), black_box(&every_third), &rs, &mut selected);
            let out = reconcile(&every_third, black_box(&every_fifth), &rs, &mut selected);
            black_box(selected.len() + out.removed.len())
        })
    });
}

fn bench_matching(c: &mut Criterion) {
    let left: Vec<String> = (0..50).map(|i| format!("Snow removal services lot {i}")).collect();
    let right: Vec<String> = (0..200).map(|i| format!("Citywide snow removal contract {i}")).collect();

    c.bench_function("link_50x200", |b| {
        b.iter(|| black_box(link_records(&left, &right, &LinkOptions::default()).len()))
    });

    c.bench_function("fuzzy_scores", |b| {
        b.iter(|| {
            FuzzyScores::compare(
                black_box("Snow removal and de-icing, citywide"),
                black_box("Citywide snow removal services"),
            )
        })
    });
}

criterion_group!(benches, bench_reconcile, bench_matching);
criterion_main!(benches);
