#![cfg(test)]

use std::path::{Path, PathBuf};

use chromap::data::Column;
use chromap::resolve::ResolveValues;
use chromap::{ColorMapper, PackedColor};
use chromap_pxl::PxlImage;
use tiny_skia::Pixmap;

mod tests;

fn actual_file_path(file: &str) -> PathBuf {
    let tests_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(tests_dir).join("actual").join(file)
}

/// Draw `data` through the mapper onto a `width x height` pixmap
fn mapped_pixmap<R>(mapper: &ColorMapper<R>, data: &dyn Column, width: u32, height: u32) -> Pixmap
where
    R: ResolveValues,
{
    let mut img = PxlImage::new(width, height).unwrap();
    img.draw(mapper, data).unwrap();
    img.into_pixmap()
}

/// Build the pixmap the hex colors describe, independently of the byte buffer
fn hex_pixmap(hex: &[String], width: u32, height: u32) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height).unwrap();
    assert_eq!(hex.len(), pixmap.pixels().len());
    for (px, hex) in pixmap.pixels_mut().iter_mut().zip(hex) {
        let [r, g, b, a] = hex.parse::<PackedColor>().unwrap().to_color_u8().rgba();
        *px = tiny_skia::ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    pixmap
}

/// Number of pixels that differ between two pixmaps of the same size
fn diff_count(actual: &Pixmap, expected: &Pixmap) -> usize {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height())
    );
    actual
        .pixels()
        .iter()
        .zip(expected.pixels())
        .filter(|(a, e)| a != e)
        .count()
}

macro_rules! assert_pixmap_eq {
    ($actual:expr, $expected:expr, $file:expr) => {
        let actual_file = $crate::actual_file_path(&format!("{}.png", $file));
        let expected_file = $crate::actual_file_path(&format!("{}-expected.png", $file));
        let diff_count = $crate::diff_count(&$actual, &$expected);
        if diff_count != 0 {
            std::fs::create_dir_all(actual_file.parent().unwrap()).unwrap();
            $actual.save_png(&actual_file).unwrap();
            $expected.save_png(&expected_file).unwrap();
            panic!(
                "PXL assertion failed\n actual image: {:?}\n    expected image: {:?}\n    diff count: {}",
                actual_file, expected_file, diff_count
            );
        } else {
            if std::fs::exists(&actual_file).unwrap() {
                std::fs::remove_file(&actual_file).unwrap();
            }
            if std::fs::exists(&expected_file).unwrap() {
                std::fs::remove_file(&expected_file).unwrap();
            }
        }
    };
}

pub(crate) use assert_pixmap_eq;
