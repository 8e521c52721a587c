//! Benchmarks for signature matching.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use imgsig::{identify, matches_extension, ImageFormat};
use std::hint::black_box;

fn samples() -> Vec<(ImageFormat, Vec<u8>)> {
    let mut webp = b"RIFF\x24\x00\x00\x00WEBPVP8 ".to_vec();
    webp.resize(4096, 0);
    let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
    png.resize(4096, 0);
    let mut jpeg = b"\xFF\xD8\xFF\xE1\x00\x18Exif".to_vec();
    jpeg.resize(4096, 0);
    vec![
        (ImageFormat::Png, png),
        (ImageFormat::Jpeg, jpeg),
        (ImageFormat::Webp, webp),
    ]
}

fn benchmark_identify(c: &mut Criterion) {
    let mut group = c.benchmark_group("identify");
    for (format, buf) in samples() {
        group.bench_with_input(BenchmarkId::from_parameter(format), &buf, |b, buf| {
            b.iter(|| identify(black_box(buf)));
        });
    }
    // Worst case: every tester runs and none matches
    let unknown = vec![0u8; 4096];
    group.bench_function("unknown", |b| b.iter(|| identify(black_box(&unknown))));
    group.finish();
}

fn benchmark_matches_extension(c: &mut Criterion) {
    let (_, webp) = samples().remove(2);
    c.bench_function("matches_extension/webp", |b| {
        b.iter(|| matches_extension(black_box(&webp), black_box("webp")));
    });
}

criterion_group!(benches, benchmark_identify, benchmark_matches_extension);
criterion_main!(benches);
