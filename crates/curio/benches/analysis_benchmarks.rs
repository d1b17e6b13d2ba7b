//! Analysis pipeline performance benchmarks.
//!
//! Measures the pure computation path: gap, balance, imbalance, scoring,
//! and recommendation synthesis over synthetic catalogues.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use curio::analysis::{
    analyze_balance, analyze_gaps, curation_score, detect_imbalance, optimal_range,
};
use curio::market::defaults::static_distribution;
use curio::recommendation::RecommendationEngine;
use curio::{Catalogue, CatalogueType, EngagementStats, Item};

/// Generate a deterministic catalogue with realistic facet spread.
fn generate_catalogue(items: usize) -> Catalogue {
    let mediums = ["painting", "photography", "sculpture", "print"];
    let styles = ["abstract", "contemporary", "minimalist"];
    let colors = ["blue", "red", "green", "black", "white"];

    Catalogue::new("bench_cat", CatalogueType::Portfolio, "bench_owner").with_items(
        (0..items)
            .map(|i| {
                Item::new(format!("item_{i:04}"))
                    .with_medium(mediums[i % mediums.len()])
                    .with_style(styles[i % styles.len()])
                    .with_price(250.0 * (1 + i % 60) as f64)
                    .with_colors([colors[i % colors.len()], colors[(i + 2) % colors.len()]])
                    .with_dimensions(10.0 + (i % 40) as f64, 12.0 + (i % 30) as f64)
                    .with_stats(EngagementStats::new(
                        (i * 37 % 1000) as u64,
                        (i * 13 % 100) as u64,
                        (i * 7 % 20) as u64,
                    ))
            })
            .collect::<Vec<_>>(),
    )
}

fn bench_analysis(c: &mut Criterion) {
    let ideal = static_distribution();
    let mut group = c.benchmark_group("analysis");

    for size in [10usize, 50, 200] {
        let catalogue = generate_catalogue(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("gaps", size), &catalogue, |b, cat| {
            b.iter(|| analyze_gaps(black_box(&cat.items), &ideal));
        });

        group.bench_with_input(BenchmarkId::new("balance", size), &catalogue, |b, cat| {
            b.iter(|| analyze_balance(black_box(&cat.items)));
        });

        group.bench_with_input(BenchmarkId::new("full", size), &catalogue, |b, cat| {
            b.iter(|| {
                let gaps = analyze_gaps(&cat.items, &ideal);
                let balance = analyze_balance(&cat.items);
                let imbalance = detect_imbalance(&balance);
                let range = optimal_range(cat.catalogue_type, cat.owner_experience, &[10, 12, 14]);
                let recs =
                    RecommendationEngine::generate(cat, &gaps, &imbalance, &range, None);
                curation_score(&gaps, &imbalance, cat.item_count()).max(recs.len() as u8)
            });
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let ideal = static_distribution();
    let catalogue = generate_catalogue(25);
    let gaps = analyze_gaps(&catalogue.items, &ideal);
    let imbalance = detect_imbalance(&analyze_balance(&catalogue.items));

    c.bench_function("scoring", |b| {
        b.iter(|| {
            curation_score(
                black_box(&gaps),
                black_box(&imbalance),
                catalogue.item_count(),
            )
        });
    });
}

criterion_group!(benches, bench_analysis, bench_scoring);
criterion_main!(benches);
