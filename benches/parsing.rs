//! Benchmarks for chatrace parsing, aggregation and frame layout.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- aggregation`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatrace::LogEntry;
use chatrace::config::{NameMap, RaceConfig};
use chatrace::core::output::{to_csv, to_json};
use chatrace::core::{CountTable, FilterConfig, apply_filters, build_frames};
use chatrace::parser::LogParser;
use chatrace::render::layout::FrameLayout;

use chrono::{Duration, NaiveDate};

const SENDERS: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Mallory",
    "Niaj",
];

// =============================================================================
// Test Data Generators
// =============================================================================

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// One message per line over `days` days, with every tenth message
/// spilling onto a continuation line.
fn generate_log(count: usize, days: i64) -> String {
    let mut lines = Vec::with_capacity(count + count / 10);
    for i in 0..count {
        let date = start_date() + Duration::days(i as i64 * days / count as i64);
        let sender = SENDERS[(i * 7 + i / 3) % SENDERS.len()];
        lines.push(format!(
            "{}, {}:{:02} - {}: Message number {}",
            date.format("%-m/%-d/%y"),
            i % 24,
            i % 60,
            sender,
            i
        ));
        if i % 10 == 0 {
            lines.push("continued on the next line".to_string());
        }
    }
    lines.join("\n")
}

fn generate_entries(count: usize, days: i64) -> Vec<LogEntry> {
    (0..count)
        .map(|i| {
            LogEntry::new(
                start_date() + Duration::days(i as i64 * days / count as i64),
                SENDERS[i % SENDERS.len()],
            )
        })
        .collect()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let parser = LogParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let log = generate_log(size, 365);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &log, |b, log| {
            b.iter(|| {
                let parsed = parser.parse_str(black_box(log));
                black_box(parsed)
            });
        });
    }
    group.finish();
}

fn bench_parse_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_reader");
    let parser = LogParser::new();
    let log = generate_log(50_000, 365);

    group.throughput(Throughput::Bytes(log.len() as u64));
    group.bench_function("50000", |b| {
        b.iter(|| {
            let parsed = parser.parse_reader(black_box(log.as_bytes())).unwrap();
            black_box(parsed)
        });
    });
    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for days in [30_i64, 365, 1_825] {
        let entries = generate_entries(50_000, days);
        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(BenchmarkId::new("daily", days), &entries, |b, entries| {
            b.iter(|| {
                let table = CountTable::from_entries(black_box(entries)).unwrap();
                black_box(table)
            });
        });

        let daily = CountTable::from_entries(&entries).unwrap();
        group.bench_with_input(BenchmarkId::new("cumulative", days), &daily, |b, daily| {
            b.iter(|| black_box(daily.cumulative()));
        });
    }
    group.finish();
}

fn bench_rename(c: &mut Criterion) {
    let daily = CountTable::from_entries(&generate_entries(50_000, 365)).unwrap();
    let names: NameMap = SENDERS
        .iter()
        .enumerate()
        .map(|(i, s)| (s.to_string(), format!("Team {}", i % 4)))
        .collect();

    c.bench_function("rename_merge_12_to_4", |b| {
        b.iter(|| black_box(daily.rename(black_box(&names))));
    });
}

fn bench_filter(c: &mut Criterion) {
    let entries = generate_entries(50_000, 365);
    let filter = FilterConfig::new()
        .with_date_from("2020-03-01")
        .unwrap()
        .with_sender("alice")
        .with_sender("bob");

    c.bench_function("filter_50000", |b| {
        b.iter(|| {
            let filtered = apply_filters(black_box(entries.clone()), &filter);
            black_box(filtered)
        });
    });
}

// =============================================================================
// Frame Benchmarks
// =============================================================================

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames");
    let cumulative = CountTable::from_entries(&generate_entries(50_000, 1_825))
        .unwrap()
        .cumulative();

    for top_n in [5_usize, 10] {
        group.throughput(Throughput::Elements(cumulative.len() as u64));
        group.bench_with_input(BenchmarkId::new("build", top_n), &top_n, |b, &top_n| {
            b.iter(|| black_box(build_frames(&cumulative, top_n)));
        });
    }

    let frames = build_frames(&cumulative, 10);
    let config = RaceConfig::default();
    group.bench_function("layout", |b| {
        b.iter(|| {
            for frame in &frames {
                black_box(FrameLayout::compute(frame, &config));
            }
        });
    });
    group.finish();
}

// =============================================================================
// Export Benchmarks
// =============================================================================

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    let cumulative = CountTable::from_entries(&generate_entries(50_000, 365))
        .unwrap()
        .cumulative();

    group.bench_function("csv", |b| {
        b.iter(|| black_box(to_csv(&cumulative).unwrap()));
    });
    group.bench_function("json", |b| {
        b.iter(|| black_box(to_json(&cumulative).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_parse_reader,
    bench_aggregation,
    bench_rename,
    bench_filter,
    bench_frames,
    bench_export,
);

criterion_main!(benches);
