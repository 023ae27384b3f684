// benches/labels.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cava_tools::clean::clean_summary;
use cava_tools::labels::parse_labels;
use cava_tools::table::Table;

fn load_headers() -> Vec<String> {
    std::fs::read_to_string("src/data/header_map.csv")
        .expect("read src/data/header_map.csv")
        .lines()
        .skip(1)
        .map(|l| l.to_string())
        .collect()
}

fn synthetic_summary(headers: &[String], rows: usize) -> String {
    let mut doc = headers.join(",");
    doc.push('\n');
    for i in 0..rows {
        let mut row = Vec::with_capacity(headers.len());
        for (c, h) in headers.iter().enumerate() {
            if h == "Cruise" {
                row.push("TN326".to_string());
            } else if h == "Station" {
                row.push("Axial Base".to_string());
            } else if h.contains("Time") {
                row.push(format!("2016-07-{:02} 21:10:00", (i % 27) + 1));
            } else if c % 7 == 0 {
                row.push("-9999999".to_string());
            } else {
                row.push(format!("{}.{}", c, i % 100));
            }
        }
        doc.push_str(&row.join(","));
        doc.push('\n');
    }
    doc
}

fn bench_labels(c: &mut Criterion) {
    let headers = load_headers();
    let expected = parse_labels(&headers)
        .into_iter()
        .map(|l| l.name)
        .collect::<Vec<_>>();
    let doc = synthetic_summary(&headers, 500);

    c.bench_function("parse_labels", |b| {
        b.iter(|| {
            let labels = parse_labels(black_box(&headers));
            black_box(labels.len())
        })
    });

    c.bench_function("clean_summary_500", |b| {
        b.iter(|| {
            let raw = Table::from_delimited(black_box(&doc), ',');
            let (cleaned, _) = clean_summary(raw, &expected).expect("clean");
            black_box(cleaned.len())
        })
    });
}

criterion_group!(benches, bench_labels);
criterion_main!(benches);
