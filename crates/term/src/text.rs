//! Plain-text floor output (no terminal control codes).
//!
//! Used for printing a finished floor to stdout, where the output may be
//! piped or redirected.

use crate::core::{block_layout, PixelGrid, WallGrid};
use crate::types::Seed;

/// `FLOOR <n> (seed=<signed seed>)`
pub fn header(seed: Seed) -> String {
    format!("FLOOR {} (seed={})", seed.floor(), seed)
}

/// One char per pixel, rows joined with newlines.
pub fn pixel_text(pixels: &PixelGrid, filled: char, empty: char) -> String {
    pixels.to_lines(filled, empty).join("\n")
}

/// One quadrant glyph per block (19 columns by 10 rows).
pub fn glyph_lines(walls: &WallGrid) -> Vec<String> {
    block_layout(walls)
        .iter()
        .map(|row| row.iter().map(|block| block.glyph()).collect())
        .collect()
}

pub fn glyph_text(walls: &WallGrid) -> String {
    glyph_lines(walls).join("\n")
}

/// Raw wall masks, one digit per cell.
pub fn walls_text(walls: &WallGrid) -> String {
    walls
        .rows()
        .map(|row| row.iter().map(|m| char::from(b'0' + m)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
