//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (carving, rasterizing, terminal output, JSON export).
//!
//! # Floor Dimensions
//!
//! Every floor of the tower has the same fixed size:
//!
//! - **Width**: 18 columns (indexed 0-17)
//! - **Height**: 9 rows (indexed 0-8)
//! - **Carvable region**: columns 0-16, rows 0-7 (the last column and row are
//!   the pre-walled right/bottom border)
//!
//! # Wall Bits
//!
//! Each wall-grid cell is a 3-bit mask:
//!
//! | Bit | Constant | Meaning |
//! |-----|----------|---------|
//! | 0 | `VISITED` | Cell was entered by a carving walk |
//! | 1 | `TOP_OPEN` | Edge between this cell and the one above is carved |
//! | 2 | `LEFT_OPEN` | Edge between this cell and the one to the left is carved |
//!
//! An edge is only ever recorded on the cell below or to the right of it.
//!
//! # Layout Dimensions
//!
//! The rasterized layout adds one block of border on the top and left and
//! expands each cell into 2x2 pixels:
//!
//! | Constant | Value |
//! |----------|-------|
//! | `LAYOUT_ROWS` | 20 |
//! | `LAYOUT_COLS` | 38 |
//!
//! # Examples
//!
//! ```
//! use druaga_maze_types::{Direction, Seed, MAZE_HEIGHT, MAZE_WIDTH};
//!
//! // Direction codes come straight from the sequence generator
//! assert_eq!(Direction::from_code(3), Direction::Left);
//! assert_eq!(Direction::Up.offset(), (0, -1));
//!
//! // Seeds accept the signed arcade range
//! let seed = Seed::from_signed(-1).unwrap();
//! assert_eq!(seed.value(), 255);
//! assert_eq!(seed.floor(), 60);
//!
//! assert_eq!(MAZE_WIDTH, 18);
//! assert_eq!(MAZE_HEIGHT, 9);
//! ```

use std::fmt;

/// Floor width in cells (18 columns)
pub const MAZE_WIDTH: usize = 18;

/// Floor height in cells (9 rows)
pub const MAZE_HEIGHT: usize = 9;

/// Total number of cells in a wall grid
pub const MAZE_CELLS: usize = MAZE_WIDTH * MAZE_HEIGHT;

/// Number of cells a carving pass visits (every cell but the right/bottom border)
pub const CARVABLE_CELLS: usize = (MAZE_WIDTH - 1) * (MAZE_HEIGHT - 1);

/// Pixel rows in a rasterized layout
pub const LAYOUT_ROWS: usize = (MAZE_HEIGHT + 1) * 2;

/// Pixel columns in a rasterized layout
pub const LAYOUT_COLS: usize = (MAZE_WIDTH + 1) * 2;

/// Set once a carving walk has entered the cell
pub const VISITED: u8 = 0b001;

/// Set when the edge above the cell has been carved away
pub const TOP_OPEN: u8 = 0b010;

/// Set when the edge left of the cell has been carved away
pub const LEFT_OPEN: u8 = 0b100;

/// All bits a wall-grid cell may carry
pub const WALL_MASK: u8 = VISITED | TOP_OPEN | LEFT_OPEN;

/// Number of floors in the tower
pub const FLOOR_COUNT: i32 = 60;

/// Compass direction of one carving step.
///
/// The discriminants are the 2-bit direction codes produced by the
/// sequence generator, so the order must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

/// Cursor offsets `(dx, dy)` indexed by direction code.
const DIRECTION_OFFSETS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Map a direction code to a direction. Only the low two bits are used.
    ///
    /// # Examples
    ///
    /// ```
    /// use druaga_maze_types::Direction;
    ///
    /// assert_eq!(Direction::from_code(0), Direction::Up);
    /// assert_eq!(Direction::from_code(1), Direction::Right);
    /// assert_eq!(Direction::from_code(6), Direction::Down);
    /// ```
    pub fn from_code(code: u8) -> Self {
        Self::ALL[(code & 0x03) as usize]
    }

    /// Cursor offset `(dx, dy)` for one step; y grows downwards
    pub fn offset(self) -> (i8, i8) {
        DIRECTION_OFFSETS[self as usize]
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Lowest accepted signed seed (the arcade stores floors as signed bytes)
pub const SEED_MIN: i64 = -128;

/// Highest accepted seed
pub const SEED_MAX: i64 = 255;

/// Why a seed could not be accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The value is outside `[SEED_MIN, SEED_MAX]`
    OutOfRange(i64),
    /// The text is not a decimal integer
    NotANumber(String),
    /// More than one seed was given
    ArgumentCount(usize),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::OutOfRange(v) => write!(
                f,
                "Seed value {} out of range; must be within [{}, {}].",
                v, SEED_MIN, SEED_MAX
            ),
            SeedError::NotANumber(s) => write!(
                f,
                "Seed {:?} is not a number; must be within [{}, {}].",
                s, SEED_MIN, SEED_MAX
            ),
            SeedError::ArgumentCount(n) => write!(
                f,
                "Invalid argument count ({}). Please enter a seed value within [{}, {}].",
                n, SEED_MIN, SEED_MAX
            ),
        }
    }
}

impl std::error::Error for SeedError {}

/// An 8-bit floor seed.
///
/// The carver only ever sees the unsigned byte; the signed view exists for
/// floor numbering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed(u8);

impl Seed {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Accept a signed value in `[-128, 255]`, wrapping negatives into the
    /// unsigned byte (`-1` becomes `255`).
    ///
    /// # Examples
    ///
    /// ```
    /// use druaga_maze_types::{Seed, SeedError};
    ///
    /// assert_eq!(Seed::from_signed(-128).unwrap().value(), 128);
    /// assert_eq!(Seed::from_signed(200).unwrap().value(), 200);
    /// assert_eq!(Seed::from_signed(256), Err(SeedError::OutOfRange(256)));
    /// ```
    pub fn from_signed(value: i64) -> Result<Self, SeedError> {
        if !(SEED_MIN..=SEED_MAX).contains(&value) {
            return Err(SeedError::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Parse a decimal seed, then apply the same range check as
    /// [`Seed::from_signed`].
    pub fn from_str(s: &str) -> Result<Self, SeedError> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| SeedError::NotANumber(trimmed.to_string()))?;
        Self::from_signed(value)
    }

    /// Seed from command-line arguments: none means seed 0, one is parsed
    /// with [`Seed::from_str`], more is an error.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, SeedError> {
        match args {
            [] => Ok(Self::default()),
            [arg] => Self::from_str(arg.as_ref()),
            _ => Err(SeedError::ArgumentCount(args.len())),
        }
    }

    /// The unsigned byte fed to the carver
    pub fn value(self) -> u8 {
        self.0
    }

    /// The signed byte view used by the arcade
    pub fn signed(self) -> i8 {
        self.0 as i8
    }

    /// Tower floor for this seed.
    ///
    /// Seeds 0..=59 are floors 1..=60 and negative seeds count down from the
    /// top (`-1` is floor 60). Seeds below -60 keep the arcade's truncating
    /// remainder and come out non-positive.
    pub fn floor(self) -> i32 {
        (self.signed() as i32 + FLOOR_COUNT) % FLOOR_COUNT + 1
    }
}

impl From<u8> for Seed {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed())
    }
}
