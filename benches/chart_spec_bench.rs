use inventory_charts::api::{ChartPalette, popularity_chart_spec, stock_colors};
use inventory_charts::core::{ItemSeries, StockThresholds, Viewport};
use inventory_charts::render::layout_chart;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_items(count: usize) -> ItemSeries {
    let names = (0..count).map(|i| format!("item-{i}")).collect();
    let quantities = (0..count).map(|i| (i % 97) as f64).collect();
    ItemSeries::new(names, quantities).expect("valid items")
}

fn bench_stock_colors_10k(c: &mut Criterion) {
    let items = sample_items(10_000);
    let palette = ChartPalette::default();

    c.bench_function("stock_colors_10k", |b| {
        b.iter(|| {
            let _ = stock_colors(
                black_box(&items),
                black_box(StockThresholds::default()),
                black_box(&palette),
            );
        })
    });
}

fn bench_popularity_layout_500(c: &mut Criterion) {
    let items = sample_items(500);
    let spec = popularity_chart_spec(&items, &ChartPalette::default(), ChartPalette::DARK_TEXT);

    c.bench_function("popularity_layout_500", |b| {
        b.iter(|| {
            let _ = layout_chart(black_box(&spec), black_box(Viewport::new(1600, 900)))
                .expect("layout should succeed");
        })
    });
}

criterion_group!(benches, bench_stock_colors_10k, bench_popularity_layout_500);
criterion_main!(benches);
