use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inidoc::{from_lines, from_str, to_string, to_string_with_options, ExportOptions, IniDocument};

fn sample_text(sections: usize) -> String {
    let mut text = String::from("title = benchmark\nversion = 3\n\n");
    for s in 0..sections {
        text.push_str(&format!("[section_{s}]\n"));
        for f in 0..5 {
            text.push_str(&format!("key_{f} = value_{s}_{f}\n"));
        }
        text.push('\n');
    }
    text
}

fn sample_document(sections: usize) -> IniDocument {
    from_str(&sample_text(sections))
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = "title = demo\n\n[server]\nhost = localhost\nport = 8080\ntimeout = 30";

    c.bench_function("parse_simple_document", |b| {
        b.iter(|| from_str(black_box(text)))
    });
}

fn benchmark_render_simple(c: &mut Criterion) {
    let doc = sample_document(1);

    c.bench_function("render_simple_document", |b| {
        b.iter(|| to_string(black_box(&doc)))
    });
}

fn benchmark_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 50, 100, 500].iter() {
        let text = sample_text(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_entry_points(c: &mut Criterion) {
    let text = sample_text(100);
    let lines: Vec<&str> = text.lines().collect();

    let mut group = c.benchmark_group("parse_entry_points");
    group.bench_function("from_str", |b| b.iter(|| from_str(black_box(&text))));
    group.bench_function("from_lines", |b| {
        b.iter(|| from_lines(black_box(&lines).iter().copied()))
    });
    group.finish();
}

fn benchmark_render_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_document");

    for size in [10, 50, 100, 500].iter() {
        let doc = sample_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_render_alphabetical(c: &mut Criterion) {
    let doc = sample_document(100);
    let options = ExportOptions::new()
        .with_alphabetical_sections(true)
        .with_alphabetical_fields(true);

    c.bench_function("render_alphabetical", |b| {
        b.iter(|| to_string_with_options(black_box(&doc), options))
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let doc = sample_document(10);

    c.bench_function("roundtrip_document", |b| {
        b.iter(|| {
            let rendered = to_string(black_box(&doc));
            from_str(black_box(&rendered))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_render_simple,
    benchmark_parse_scaling,
    benchmark_parse_entry_points,
    benchmark_render_scaling,
    benchmark_render_alphabetical,
    benchmark_roundtrip
);
criterion_main!(benches);
