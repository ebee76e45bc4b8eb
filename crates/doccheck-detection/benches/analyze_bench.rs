//! Criterion benchmarks for doccheck-detection.
//!
//! - extraction over a 200-sentence handbook
//! - full analysis of 2 and 5 policy documents

use criterion::{criterion_group, criterion_main, Criterion};

use doccheck_core::models::Document;
use doccheck_detection::{analyze, extract_relevant_sentences};

const TEMPLATES: &[&str] = &[
    "Assignment {n} must be submitted before {h}:00 PM on the due date",
    "Students must maintain a minimum of {p}% attendance in section {n}",
    "Late work for unit {n} receives a penalty of {p}% per day",
    "Attendance at lab {n} is required for every student",
    "Extensions for project {n} require {d} days advance notice",
    "The library closes at noon on holidays",
];

fn make_document(name: &str, sentences: usize, seed: usize) -> Document {
    let text: Vec<String> = (0..sentences)
        .map(|i| {
            let k = i + seed;
            TEMPLATES[k % TEMPLATES.len()]
                .replace("{n}", &(i % 7).to_string())
                .replace("{h}", &(8 + k % 4).to_string())
                .replace("{p}", &(50 + (k * 5) % 45).to_string())
                .replace("{d}", &(1 + k % 9).to_string())
        })
        .collect();
    Document::new(name, text.join(". "))
}

fn bench_extraction(c: &mut Criterion) {
    let doc = make_document("handbook.txt", 200, 0);
    c.bench_function("extract_200_sentences", |bench| {
        bench.iter(|| extract_relevant_sentences(&doc.content, &doc.name));
    });
}

fn bench_analyze_pair(c: &mut Criterion) {
    let docs = vec![
        make_document("guidelines.txt", 40, 0),
        make_document("handbook.txt", 40, 3),
    ];
    c.bench_function("analyze_2_documents_40_sentences", |bench| {
        bench.iter(|| analyze(&docs));
    });
}

fn bench_analyze_five(c: &mut Criterion) {
    let docs: Vec<Document> = (0..5)
        .map(|i| make_document(&format!("policy{i}.txt"), 30, i))
        .collect();
    c.bench_function("analyze_5_documents_30_sentences", |bench| {
        bench.iter(|| analyze(&docs));
    });
}

criterion_group!(benches, bench_extraction, bench_analyze_pair, bench_analyze_five);
criterion_main!(benches);
