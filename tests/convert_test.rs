//! End-to-end conversion tests: image file in, symbol string out.

mod common;

use common::fixtures::colors;
use common::{assert_png, assert_symbol_string, ImageDir};
use hue_palette::{Correction, Symbol};
use huestring::convert::{convert_file, ConvertOptions};
use huestring::error::ConvertError;
use huestring::export::{ExportFormat, ExportKind};
use pretty_assertions::assert_eq;

fn options(width: u32, height: u32) -> ConvertOptions {
    ConvertOptions {
        width,
        height,
        ..Default::default()
    }
}

#[test]
fn test_quadrant_image_is_row_major() {
    let dir = ImageDir::new();
    let path = dir.quadrants("quad.png");

    let conversion = convert_file(&path, &options(2, 2)).unwrap();
    assert_eq!(conversion.as_str(), "01rg");
    assert_eq!(conversion.source, path);
}

#[test]
fn test_non_square_grid() {
    let dir = ImageDir::new();
    let path = dir.rgb("stripes.png", 3, 2, |x, _| match x {
        0 => colors::RED,
        1 => colors::GREEN,
        _ => colors::BLUE,
    });

    let conversion = convert_file(&path, &options(3, 2)).unwrap();
    assert_eq!(conversion.as_str(), "rgbrgb");
}

#[test]
fn test_default_size_is_fifty_by_fifty() {
    let dir = ImageDir::new();
    let path = dir.solid("big.png", 120, 80, colors::GREEN);

    let conversion = convert_file(&path, &ConvertOptions::default()).unwrap();
    assert_symbol_string(conversion.as_str(), 50, 50);
    assert!(conversion.as_str().chars().all(|c| c == 'g'));

    let summary = conversion.summary();
    assert_eq!(summary.length, 2500);
    assert_eq!(summary.expected(), 2500);
    assert_eq!(summary.mode, "normal");
}

#[test]
fn test_resize_ignores_aspect_ratio() {
    let dir = ImageDir::new();
    let path = dir.solid("wide.png", 64, 8, colors::BLUE);

    let conversion = convert_file(&path, &options(4, 3)).unwrap();
    assert_eq!(conversion.as_str(), "bbbbbbbbbbbb");
    assert_eq!(conversion.grid.width(), 4);
    assert_eq!(conversion.grid.height(), 3);
}

#[test]
fn test_correction_remaps_blue_to_purple() {
    let dir = ImageDir::new();
    let path = dir.solid("blue.png", 6, 6, colors::BLUE);

    let opts = ConvertOptions {
        correction: Correction::new(Symbol::Blue, Symbol::Purple),
        ..options(3, 3)
    };
    let conversion = convert_file(&path, &opts).unwrap();
    assert_eq!(conversion.as_str(), "ppppppppp");
    assert_eq!(conversion.summary().mode, "B → P correction");
}

#[test]
fn test_transparent_pixels_become_white() {
    let dir = ImageDir::new();
    let path = dir.rgba("alpha.png", 2, 1, |x, _| {
        if x == 0 {
            [255, 0, 0, 255]
        } else {
            [0, 0, 0, 0]
        }
    });

    let conversion = convert_file(&path, &options(2, 1)).unwrap();
    assert_eq!(conversion.as_str(), "r1");
}

#[test]
fn test_half_transparent_black_lands_on_mid_grey() {
    let dir = ImageDir::new();
    // 0 over white at alpha 128 flattens to grey 127, whose nearest
    // reference in RGB is orange
    let path = dir.rgba("ghost.png", 1, 1, |_, _| [0, 0, 0, 128]);

    let conversion = convert_file(&path, &options(1, 1)).unwrap();
    assert_eq!(conversion.as_str(), "o");
}

#[test]
fn test_parallel_matches_sequential() {
    let dir = ImageDir::new();
    let path = dir.rgb("gradient.png", 32, 32, |x, y| {
        [(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8]
    });

    let sequential = convert_file(&path, &options(16, 16)).unwrap();
    let parallel = convert_file(
        &path,
        &ConvertOptions {
            parallel: true,
            ..options(16, 16)
        },
    )
    .unwrap();
    assert_eq!(sequential.as_str(), parallel.as_str());
}

#[test]
fn test_missing_file() {
    let dir = ImageDir::new();
    let result = convert_file(&dir.join("nope.png"), &options(2, 2));
    assert!(matches!(result, Err(ConvertError::NotFound(_))));
}

#[test]
fn test_undecodable_file() {
    let dir = ImageDir::new();
    let path = dir.file("broken.png", b"definitely not a png");

    let err = convert_file(&path, &options(2, 2)).unwrap_err();
    assert!(matches!(err, ConvertError::Decode { .. }));
    assert!(err.to_string().starts_with("Failed to decode"));
}

#[test]
fn test_zero_dimensions() {
    let dir = ImageDir::new();
    let path = dir.quadrants("quad.png");

    let result = convert_file(&path, &options(0, 2));
    assert!(matches!(
        result,
        Err(ConvertError::InvalidDimensions {
            width: 0,
            height: 2
        })
    ));
}

#[test]
fn test_local_storage_export() {
    let dir = ImageDir::new();
    let path = dir.quadrants("quad.png");
    let conversion = convert_file(&path, &options(2, 2)).unwrap();

    let format = ExportFormat::from_kind(ExportKind::LocalStorage, "submit-image");
    assert_eq!(
        format.render(conversion.as_str()),
        r#"localStorage["submit-image"] = "01rg""#
    );
}

#[test]
fn test_preview_round_trip() {
    let dir = ImageDir::new();
    let path = dir.quadrants("quad.png");
    let conversion = convert_file(&path, &options(2, 2)).unwrap();

    let scaled = dir.join("scaled.png");
    huestring::preview::write_preview(&conversion.grid, 4, &scaled).unwrap();
    let bytes = std::fs::read(&scaled).unwrap();
    assert_png(&bytes);
    let img = image::open(&scaled).unwrap();
    assert_eq!((img.width(), img.height()), (8, 8));

    // At scale 1 the preview converts back to the same string
    let exact = dir.join("exact.png");
    huestring::preview::write_preview(&conversion.grid, 1, &exact).unwrap();
    let again = convert_file(&exact, &options(2, 2)).unwrap();
    assert_eq!(again.as_str(), "01rg");
}
