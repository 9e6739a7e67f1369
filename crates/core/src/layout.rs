//! Layout module - wall grid to pixel raster
//!
//! Every wall-grid cell becomes a 2x2 pixel block with a pole in its
//! bottom-right corner. The block is picked by a 2-bit index: the cell's
//! top-open bit is the low bit and its left-open bit the high bit. Maze cell
//! (x, y) lands on block (x + 1, y + 1); the extra top row and left column
//! are fixed border blocks that close the floor off.
//!
//! ```text
//!  index  pattern  glyph
//!    0     .. .#     ▗   pole only
//!    1     .# .#     ▐   right wall
//!    2     .. ##     ▄   bottom wall
//!    3     .# ##     ▟   right and bottom walls
//!    4     .. ..         empty
//! ```

use crate::types::{
    LAYOUT_COLS, LAYOUT_ROWS, LEFT_OPEN, MAZE_HEIGHT, MAZE_WIDTH, TOP_OPEN,
};
use crate::wall_grid::WallGrid;

/// Block rows in a layout (one border row plus one per maze row)
pub const BLOCK_ROWS: usize = MAZE_HEIGHT + 1;

/// Block columns in a layout (one border column plus one per maze column)
pub const BLOCK_COLS: usize = MAZE_WIDTH + 1;

/// One of the five 2x2 pixel shapes a cell can rasterize to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Block {
    Pole = 0,
    RightWall = 1,
    BottomWall = 2,
    RightBottomWall = 3,
    Empty = 4,
}

/// Pixel patterns indexed by block; row-major, `true` is filled
const BLOCK_PATTERNS: [[[bool; 2]; 2]; 5] = [
    [[false, false], [false, true]],
    [[false, true], [false, true]],
    [[false, false], [true, true]],
    [[false, true], [true, true]],
    [[false, false], [false, false]],
];

/// Quadrant glyphs indexed by block
const BLOCK_GLYPHS: [char; 5] = ['▗', '▐', '▄', '▟', ' '];

impl Block {
    /// Map a 2-bit wall index to its block; anything else is empty
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Block::Pole,
            1 => Block::RightWall,
            2 => Block::BottomWall,
            3 => Block::RightBottomWall,
            _ => Block::Empty,
        }
    }

    /// The 2x2 pixel pattern, row-major
    pub fn pattern(self) -> [[bool; 2]; 2] {
        BLOCK_PATTERNS[self as usize]
    }

    /// The quadrant character with the same shape
    pub fn glyph(self) -> char {
        BLOCK_GLYPHS[self as usize]
    }
}

/// Block index for maze cell (x, y).
///
/// The visited bit is dropped, leaving the top-open bit as bit 0 and the
/// left-open bit as bit 1. The bottom row always gets bit 1 and the right
/// column always gets bit 0, since nothing below or to the right owns
/// those edges.
pub fn cell_block(grid: &WallGrid, x: usize, y: usize) -> Block {
    let mask = grid.get(x as i32, y as i32).unwrap_or(0);
    let mut index = (mask & (TOP_OPEN | LEFT_OPEN)) >> 1;
    if y == MAZE_HEIGHT - 1 {
        index |= 0b10;
    }
    if x == MAZE_WIDTH - 1 {
        index |= 0b01;
    }
    Block::from_index(index & 0b11)
}

/// Block-level layout: border blocks on the top row and left column, then
/// one block per maze cell at `(x + 1, y + 1)`
pub fn block_layout(grid: &WallGrid) -> [[Block; BLOCK_COLS]; BLOCK_ROWS] {
    let mut blocks = [[Block::Empty; BLOCK_COLS]; BLOCK_ROWS];

    // Top border.
    blocks[0][0] = Block::Pole;
    for block in blocks[0].iter_mut().skip(1) {
        *block = Block::BottomWall;
    }

    for y in 0..MAZE_HEIGHT {
        let row = &mut blocks[y + 1];
        // Left border.
        row[0] = Block::RightWall;
        for x in 0..MAZE_WIDTH {
            row[x + 1] = cell_block(grid, x, y);
        }
    }

    blocks
}

/// Binary pixel raster of one floor (20 rows x 38 columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    pixels: [[bool; LAYOUT_COLS]; LAYOUT_ROWS],
}

impl PixelGrid {
    pub fn width(&self) -> usize {
        LAYOUT_COLS
    }

    pub fn height(&self) -> usize {
        LAYOUT_ROWS
    }

    /// Pixel at column x, row y; None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    pub fn row(&self, y: usize) -> &[bool; LAYOUT_COLS] {
        &self.pixels[y]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; LAYOUT_COLS]> {
        self.pixels.iter()
    }

    /// Render each row as text with one char per pixel
    pub fn to_lines(&self, filled: char, empty: char) -> Vec<String> {
        self.pixels
            .iter()
            .map(|row| row.iter().map(|&p| if p { filled } else { empty }).collect())
            .collect()
    }
}

/// Rasterize a wall grid into pixels
pub fn rasterize(grid: &WallGrid) -> PixelGrid {
    let mut pixels = [[false; LAYOUT_COLS]; LAYOUT_ROWS];

    for (by, block_row) in block_layout(grid).iter().enumerate() {
        for (bx, block) in block_row.iter().enumerate() {
            let pattern = block.pattern();
            for (r, pattern_row) in pattern.iter().enumerate() {
                pixels[by * 2 + r][bx * 2..bx * 2 + 2].copy_from_slice(pattern_row);
            }
        }
    }

    PixelGrid { pixels }
}
