//! Core maze logic module - pure, deterministic, and testable
//!
//! This module contains the floor generator and its rasterizer.
//! It has **no dependencies** on terminals, files, or argument parsing, making it:
//!
//! - **Deterministic**: Same seed always produces the same floor
//! - **Testable**: Every step of the carving pass can be observed
//! - **Portable**: Runs anywhere (terminal, GUI, headless)
//! - **Allocation-free**: Grids are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`sequence`]: seeded shift-register direction generator
//! - [`wall_grid`]: 18x9 grid of wall bitmasks
//! - [`carver`]: the maze-carving walk, stepwise or in one go
//! - [`layout`]: wall grid to 20x38 pixel raster
//!
//! # Example
//!
//! ```
//! use druaga_maze_core::{generate, rasterize};
//!
//! let walls = generate(0);
//! assert!(walls.is_visited(0, 0));
//!
//! let pixels = rasterize(&walls);
//! assert_eq!((pixels.height(), pixels.width()), (20, 38));
//! assert!(pixels.is_filled(1, 1));
//! ```

pub mod carver;
pub mod layout;
pub mod sequence;
pub mod wall_grid;

pub use druaga_maze_types as types;

// Re-export commonly used types for convenience
pub use carver::{
    generate, try_generate, CarveError, CarveEvent, CarveStats, Carver, MAX_BLOCKED_DRAWS,
};
pub use layout::{block_layout, cell_block, rasterize, Block, PixelGrid};
pub use sequence::DirectionSequence;
pub use wall_grid::WallGrid;

/// Generate and rasterize the floor for `seed`
pub fn floor_layout(seed: u8) -> PixelGrid {
    rasterize(&generate(seed))
}
