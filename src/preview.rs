//! PNG preview of a converted grid.
//!
//! Each symbol is drawn as a `scale`×`scale` block in its reference color.
//! The file is a 4-bit indexed PNG whose palette is the nine reference
//! colors in canonical order.

use hue_palette::{Symbol, SymbolGrid};
use std::io::Cursor;
use std::path::Path;

use crate::error::ConvertError;

/// Largest accepted block size
pub const MAX_SCALE: u32 = 64;

/// Encode `grid` as an indexed PNG, each symbol `scale` pixels square.
pub fn encode_preview(grid: &SymbolGrid, scale: u32) -> Result<Vec<u8>, ConvertError> {
    let scale = scale.clamp(1, MAX_SCALE);
    let width = grid.width() as u32 * scale;
    let height = grid.height() as u32 * scale;
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimensions { width, height });
    }

    let indices = upscale_indices(grid, scale as usize);
    let packed = pack_nibbles(&indices, width);
    encode_png(width, height, &palette_plte(), &packed)
}

/// Encode and write to `path`
pub fn write_preview(grid: &SymbolGrid, scale: u32, path: &Path) -> Result<(), ConvertError> {
    let bytes = encode_preview(grid, scale)?;
    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), scale, "Wrote preview");
    Ok(())
}

fn palette_plte() -> Vec<u8> {
    Symbol::ALL
        .iter()
        .flat_map(|s| s.reference().to_bytes())
        .collect()
}

/// Palette index per output pixel, row-major
fn upscale_indices(grid: &SymbolGrid, scale: usize) -> Vec<u8> {
    let width = grid.width();
    let symbols = grid.symbols();
    let mut out = Vec::with_capacity(symbols.len() * scale * scale);

    for row in symbols.chunks(width) {
        let mut line = Vec::with_capacity(width * scale);
        for symbol in row {
            line.extend(std::iter::repeat(symbol.index() as u8).take(scale));
        }
        for _ in 0..scale {
            out.extend_from_slice(&line);
        }
    }
    out
}

fn encode_png(width: u32, height: u32, plte: &[u8], packed: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Four);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Two palette indices per byte, high nibble first. Odd-width rows end
/// with a zero low nibble.
fn pack_nibbles(indices: &[u8], width: u32) -> Vec<u8> {
    let width = width as usize;
    let bytes_per_row = width.div_ceil(2);
    let mut packed = Vec::with_capacity(bytes_per_row * (indices.len() / width));

    for row in indices.chunks(width) {
        for pair in row.chunks(2) {
            let hi = pair[0] & 0x0F;
            let lo = pair.get(1).map_or(0, |idx| idx & 0x0F);
            packed.push(hi << 4 | lo);
        }
    }
    packed
}
