//! Benchmarks for the data pass: tokenizing grid rows and loading them.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kcsv_processor::HeightField;
use kcsv_processor::processor::{read_field, read_metadata};
use kcsv_processor::tokenizer::tokenize;
use std::path::Path;

fn grid_rows(points: usize, profiles: usize) -> Vec<String> {
    (0..profiles)
        .map(|profile| {
            (0..points)
                .map(|point| format!("\"{:.3}\"", ((point * 31 + profile * 17) % 997) as f64 * 0.01))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect()
}

fn synthetic_export(points: usize, profiles: usize) -> String {
    let mut lines = vec![
        "\"Model\",\"VK-X1000\"".to_string(),
        format!("\"Horizontal\",\"{}\"", points),
        format!("\"Vertical\",\"{}\"", profiles),
        "\"XY Calibration\",\"0.138\",\"µm\"".to_string(),
        "\"Unit\",\"µm\"".to_string(),
        "\"Height\"".to_string(),
    ];
    lines.extend(grid_rows(points, profiles));
    lines.join("\n")
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_row");

    for points in [64, 512, 2048].iter() {
        let row = grid_rows(*points, 1).remove(0);
        group.bench_with_input(BenchmarkId::from_parameter(points), points, |b, _| {
            b.iter(|| tokenize(black_box(&row)));
        });
    }

    group.finish();
}

fn bench_add_profiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_profiles");

    for size in [64, 256].iter() {
        let rows: Vec<Vec<String>> = grid_rows(*size, *size).iter().map(|row| tokenize(row)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut field = HeightField::new(size, size).unwrap();
                for row in &rows {
                    field.add_profile(black_box(row.as_slice()));
                }
                field.central_height()
            });
        });
    }

    group.finish();
}

fn bench_two_pass_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_pass_ingest");

    for size in [64, 256].iter() {
        let text = synthetic_export(*size, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let metadata = read_metadata(black_box(&text), Path::new("bench.csv")).unwrap();
                read_field(&text, &metadata, false).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_add_profiles, bench_two_pass_ingest);
criterion_main!(benches);
