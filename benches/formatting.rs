use criterion::{Criterion, criterion_group, criterion_main};
use hooklog::fmt::{FormatTemplate, FormatValues, render};
use hooklog::{Config, DateFormat, FileFormat};
use std::hint::black_box;

fn bench_format_template_render(c: &mut Criterion) {
    let template = FormatTemplate::parse("{date} {label} [{file}:{line}] {prefix} {msg}");
    let values = FormatValues::new()
        .date("14:30:00")
        .label("INFO ")
        .location("src/main.rs", "42")
        .prefix("[api]")
        .msg("Application started successfully");

    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

fn bench_message_render(c: &mut Criterion) {
    let args = vec!["42".to_string(), "db-primary".to_string(), "1.5s".to_string()];

    c.bench_function("fmt::render", |b| {
        b.iter(|| {
            render(
                black_box("request {} to {} took {}"),
                black_box(&args),
            )
        });
    });
}

fn bench_config_compile(c: &mut Criterion) {
    let mut config = Config::new()
        .with_date(DateFormat::Full)
        .with_file(FileFormat::Short)
        .with_color(true)
        .with_prefix("[bench]");

    c.bench_function("Config::compile", |b| {
        b.iter(|| config.compile());
    });
}

criterion_group!(
    benches,
    bench_format_template_render,
    bench_message_render,
    bench_config_compile,
);
criterion_main!(benches);
