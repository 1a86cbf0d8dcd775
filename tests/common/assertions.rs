//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert `s` is a palette string of exactly `width * height` symbols
pub fn assert_symbol_string(s: &str, width: usize, height: usize) {
    assert_eq!(
        s.chars().count(),
        width * height,
        "Expected {}x{} symbols, got {:?}",
        width,
        height,
        s
    );
    assert!(
        s.chars().all(|c| "01roygbtp".contains(c)),
        "Unexpected character in {:?}",
        s
    );
}

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG data, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
