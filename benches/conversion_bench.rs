use convert_images::processing::{convert_to_webp, encode_webp, to_encodable};
use convert_images::{classify, FileKind};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_test_jpeg(width: u32, height: u32) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.jpg");
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 96]))
        .save_with_format(&test_file, ImageFormat::Jpeg)
        .unwrap();
    (test_file, temp_dir)
}

fn bench_classification(c: &mut Criterion) {
    let names = ["hero.JPG", "logo.svg", "notes.txt", "photo.jpeg", "anim.gif", "icon.PNG"];
    c.bench_function("classify", |b| {
        b.iter(|| {
            names
                .iter()
                .filter(|n| classify(Path::new(black_box(n))) == FileKind::Raster)
                .count()
        })
    });
}

fn bench_webp_encoding(c: &mut Criterion) {
    let img = to_encodable(DynamicImage::ImageRgb8(RgbImage::from_fn(512, 512, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 64])
    })));

    let mut group = c.benchmark_group("webp_encoding");
    for quality in [50i32, 85, 95] {
        group.bench_with_input(BenchmarkId::from_parameter(quality), &quality, |b, &q| {
            b.iter(|| encode_webp(black_box(&img), q).unwrap())
        });
    }
    group.finish();
}

fn bench_convert_file(c: &mut Criterion) {
    let (input, temp_dir) = create_test_jpeg(1280, 720);
    let output = temp_dir.path().join("test.webp");

    c.bench_function("convert_to_webp_1280x720", |b| {
        b.iter(|| convert_to_webp(black_box(&input), &output, 85).unwrap())
    });
}

criterion_group!(
    benches,
    bench_classification,
    bench_webp_encoding,
    bench_convert_file
);
criterion_main!(benches);
