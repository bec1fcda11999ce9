//! Benchmarks for parsing and rendering.
//!
//! Run with: cargo bench --bench parse_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kiroku::domain::Note;
use kiroku::export::{ExportContext, ExportOptions, render_markdown, render_text};
use kiroku::parse::{parse_blocks, parse_inline};
use chrono::{TimeZone, Utc};

// =============================================================================
// Test Data Generation
// =============================================================================

/// Sample words for generating realistic note content
const WORDS: &[&str] = &[
    "architecture",
    "design",
    "pattern",
    "system",
    "component",
    "interface",
    "module",
    "function",
    "method",
    "struct",
    "implementation",
    "abstraction",
    "dependency",
    "testing",
    "integration",
    "performance",
];

/// Generate a markdown body with `lines` lines mixing every block kind.
fn generate_body(lines: usize) -> String {
    let mut body = String::new();
    for i in 0..lines {
        let word = WORDS[i % WORDS.len()];
        let next = WORDS[(i + 1) % WORDS.len()];
        match i % 10 {
            0 => body.push_str(&format!("## {word} and {next}\n")),
            1 => body.push_str(&format!("- {word} item with **{next}**\n")),
            2 => body.push_str(&format!("1. ordered {word}\n")),
            3 => body.push_str(&format!("- [x] done {word}\n")),
            4 => body.push_str(&format!("> quoted {word} and `{next}`\n")),
            5 => body.push_str("```\n"),
            6 => body.push_str(&format!("let {word} = {next};\n")),
            7 => body.push_str("```\n"),
            8 => body.push('\n'),
            _ => body.push_str(&format!(
                "Paragraph about *{word}* with a [link](https://example.com/{next}).\n"
            )),
        }
    }
    body
}

fn sample_note(lines: usize) -> Note {
    let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    Note::builder("Benchmark Note", ts, ts)
        .content(generate_body(lines))
        .category("software/notes")
        .tags(vec!["rust".into(), "bench".into()])
        .build()
        .expect("benchmark note should be valid")
}

// =============================================================================
// Parser Benchmarks
// =============================================================================

fn bench_parse_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_blocks");

    for lines in [100, 500, 1000] {
        let body = generate_body(lines);

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::new("lines", lines), &body, |b, body| {
            b.iter(|| parse_blocks(body));
        });
    }

    group.finish();
}

fn bench_parse_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_inline");

    group.bench_function("plain", |b| {
        b.iter(|| parse_inline("a plain line with no markers at all"));
    });

    group.bench_function("mixed_spans", |b| {
        b.iter(|| parse_inline("**bold** then *italic* then `code` then [x](https://e.com)"));
    });

    group.bench_function("overlap_heavy", |b| {
        b.iter(|| parse_inline("[**nested** bold](https://e.com) and *a_b_c* **d*e*f**"));
    });

    group.finish();
}

// =============================================================================
// Renderer Benchmarks
// =============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let options = ExportOptions::default();

    for lines in [100, 1000] {
        let note = sample_note(lines);
        let context = ExportContext::for_note(&note);

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::new("text", lines), &note, |b, note| {
            b.iter(|| render_text(note, &options, &context));
        });
        group.bench_with_input(BenchmarkId::new("markdown", lines), &note, |b, note| {
            b.iter(|| render_markdown(note, &options, &context));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Groups
// =============================================================================

criterion_group!(parse_benches, bench_parse_blocks, bench_parse_inline);
criterion_group!(render_benches, bench_render);

criterion_main!(parse_benches, render_benches);
