#![allow(dead_code)]

use assert_fs::prelude::*;
use assert_fs::TempDir;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

pub const SVG_BODY: &[u8] =
    b"<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"8\" height=\"8\"><rect width=\"8\" height=\"8\"/></svg>\n";

pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
    .save_with_format(path, ImageFormat::Jpeg)
    .unwrap();
}

pub fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_fn(width, height, |x, _| Rgba([0, (x % 256) as u8, 200, 180]))
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

/// `src/` holding `a.JPG`, `b.png`, `c.svg` and `notes.txt`.
pub fn create_mixed_source(temp: &TempDir) -> assert_fs::fixture::ChildPath {
    let src = temp.child("src");
    src.create_dir_all().unwrap();
    write_jpeg(src.child("a.JPG").path(), 64, 48);
    write_png(src.child("b.png").path(), 32, 32);
    src.child("c.svg").write_binary(SVG_BODY).unwrap();
    src.child("notes.txt").write_str("not an image").unwrap();
    src
}

pub fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
