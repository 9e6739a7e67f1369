//! Wall grid module - per-cell wall bitmasks of one floor
//!
//! The grid is 18x9 cells stored as a flat array for cache locality and
//! zero allocation. Coordinates are (x, y) with x ranging 0..17 (left to
//! right) and y ranging 0..8 (top to bottom).
//!
//! Each cell only stores its own top and left edges. The right and bottom
//! edges belong to the neighbouring cells, and the rightmost column and
//! bottom row close the floor off.

use crate::types::{
    LEFT_OPEN, MAZE_CELLS, MAZE_HEIGHT, MAZE_WIDTH, TOP_OPEN, VISITED, WALL_MASK,
};

/// Wall bitmasks for one floor, row-major (y * WIDTH + x)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallGrid {
    cells: [u8; MAZE_CELLS],
}

impl WallGrid {
    /// Create a grid with every wall standing and nothing visited
    pub fn new() -> Self {
        Self {
            cells: [0; MAZE_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= MAZE_WIDTH as i32 || y < 0 || y >= MAZE_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * MAZE_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        MAZE_WIDTH
    }

    pub fn height(&self) -> usize {
        MAZE_HEIGHT
    }

    /// Get the mask at (x, y); None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// OR `bits` into the cell at (x, y).
    /// Returns false if out of bounds
    pub fn insert(&mut self, x: i32, y: i32, bits: u8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] |= bits & WALL_MASK;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at (x, y) carries all of `bits`.
    /// Out-of-bounds cells carry nothing.
    pub fn has(&self, x: i32, y: i32, bits: u8) -> bool {
        self.get(x, y).is_some_and(|m| m & bits == bits)
    }

    pub fn is_visited(&self, x: i32, y: i32) -> bool {
        self.has(x, y, VISITED)
    }

    /// Whether the edge above (x, y) has been carved
    pub fn is_top_open(&self, x: i32, y: i32) -> bool {
        self.has(x, y, TOP_OPEN)
    }

    /// Whether the edge left of (x, y) has been carved
    pub fn is_left_open(&self, x: i32, y: i32) -> bool {
        self.has(x, y, LEFT_OPEN)
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(MAZE_WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of carved edges (open top/left bits) in the grid
    pub fn carved_edges(&self) -> usize {
        self.cells
            .iter()
            .map(|m| ((m & TOP_OPEN) != 0) as usize + ((m & LEFT_OPEN) != 0) as usize)
            .sum()
    }

    /// Build a grid from row-major masks; bits outside the wall mask are dropped
    pub fn from_rows(rows: [[u8; MAZE_WIDTH]; MAZE_HEIGHT]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &mask) in row.iter().enumerate() {
                grid.cells[y * MAZE_WIDTH + x] = mask & WALL_MASK;
            }
        }
        grid
    }

    /// Convert to row arrays (for snapshots and display)
    pub fn to_rows(&self) -> [[u8; MAZE_WIDTH]; MAZE_HEIGHT] {
        let mut rows = [[0u8; MAZE_WIDTH]; MAZE_HEIGHT];
        for (y, row) in self.rows().enumerate() {
            rows[y].copy_from_slice(row);
        }
        rows
    }
}

impl Default for WallGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(WallGrid::index(0, 0), Some(0));
        assert_eq!(WallGrid::index(17, 0), Some(17));
        assert_eq!(WallGrid::index(0, 1), Some(18));
        assert_eq!(WallGrid::index(17, 8), Some(161));
        assert_eq!(WallGrid::index(-1, 0), None);
        assert_eq!(WallGrid::index(18, 0), None);
        assert_eq!(WallGrid::index(0, 9), None);
    }

    #[test]
    fn test_insert_accumulates_bits() {
        let mut grid = WallGrid::new();
        assert!(grid.insert(3, 4, VISITED));
        assert!(grid.insert(3, 4, TOP_OPEN));
        assert_eq!(grid.get(3, 4), Some(VISITED | TOP_OPEN));
        assert!(grid.is_visited(3, 4));
        assert!(grid.is_top_open(3, 4));
        assert!(!grid.is_left_open(3, 4));
    }

    #[test]
    fn test_insert_out_of_bounds_is_rejected() {
        let mut grid = WallGrid::new();
        assert!(!grid.insert(-1, 0, VISITED));
        assert!(!grid.insert(0, MAZE_HEIGHT as i32, VISITED));
        assert_eq!(grid, WallGrid::new());
        assert!(!grid.is_visited(-1, -1));
    }

    #[test]
    fn test_insert_masks_foreign_bits() {
        let mut grid = WallGrid::new();
        grid.insert(0, 0, 0xFF);
        assert_eq!(grid.get(0, 0), Some(WALL_MASK));
    }

    #[test]
    fn test_rows_roundtrip() {
        let mut rows = [[0u8; MAZE_WIDTH]; MAZE_HEIGHT];
        rows[2][5] = VISITED | LEFT_OPEN;
        rows[8][17] = TOP_OPEN;
        let grid = WallGrid::from_rows(rows);
        assert_eq!(grid.to_rows(), rows);
        assert_eq!(grid.get(5, 2), Some(VISITED | LEFT_OPEN));
        assert_eq!(grid.carved_edges(), 2);
    }
}
