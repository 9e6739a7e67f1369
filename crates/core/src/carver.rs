//! Carver module - seeded maze-carving walk
//!
//! Start positions are scanned column by column from the right (x = 16 down
//! to 0), and top to bottom within a column (y = 0 to 7). From every start
//! that is not yet visited, a walk draws directions from the
//! [`DirectionSequence`] and knocks down one wall per successful draw until it
//! runs into a pole: the border or a cell some earlier walk already visited.
//! A draw whose wall is already down is retried from the same cell.
//!
//! The carver is a small state machine so callers can observe every draw
//! (the terminal playback does); [`generate`] just runs it to the end.

use std::fmt;

use arrayvec::ArrayVec;
use log::{debug, error, trace};

use crate::sequence::DirectionSequence;
use crate::types::{
    Direction, CARVABLE_CELLS, LEFT_OPEN, MAZE_HEIGHT, MAZE_WIDTH, TOP_OPEN, VISITED,
};
use crate::wall_grid::WallGrid;

/// Maximum consecutive blocked draws from one cell before the run is
/// abandoned. No seed comes close: the worst case over all 256 seeds is 7.
pub const MAX_BLOCKED_DRAWS: u32 = 64;

/// Rows that hold start positions (the bottom row is border)
const START_ROWS: i32 = (MAZE_HEIGHT - 1) as i32;

/// Columns that hold start positions (the right column is border)
const START_COLS: i32 = (MAZE_WIDTH - 1) as i32;

/// Owner of the edge crossed by each direction, as `(dx, dy, bit)` relative
/// to the cursor. Indexed by direction code.
const EDGE_OWNERS: [(i32, i32, u8); 4] = [
    (0, 0, TOP_OPEN),  // Up: our own top edge
    (1, 0, LEFT_OPEN), // Right: left edge of the cell to the right
    (0, 1, TOP_OPEN),  // Down: top edge of the cell below
    (0, 0, LEFT_OPEN), // Left: our own left edge
];

/// Whether (x, y) ends a walk: outside the carvable region or already visited
pub fn is_pole(grid: &WallGrid, x: i32, y: i32) -> bool {
    if x < 0 || x >= START_COLS || y < 0 || y >= START_ROWS {
        return true;
    }
    grid.is_visited(x, y)
}

/// Whether the wall in `dir` from (x, y) is already down or cannot be
/// removed (the owning cell is off the grid)
pub fn is_blocked(grid: &WallGrid, x: i32, y: i32, dir: Direction) -> bool {
    let (dx, dy, bit) = EDGE_OWNERS[dir as usize];
    match grid.get(x + dx, y + dy) {
        Some(mask) => mask & bit != 0,
        None => true,
    }
}

/// The carving pass could not finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveError {
    /// Too many consecutive blocked draws from one cell
    RetryLimit { seed: u8, x: i32, y: i32, draws: u32 },
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarveError::RetryLimit { seed, x, y, draws } => write!(
                f,
                "seed {}: {} consecutive blocked draws at ({}, {})",
                seed, draws, x, y
            ),
        }
    }
}

impl std::error::Error for CarveError {}

/// What a single [`Carver::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveEvent {
    /// A new walk begins at an unvisited start position
    WalkStarted { x: i32, y: i32 },
    /// The drawn direction was already open; the cursor stays put
    Blocked { x: i32, y: i32, direction: Direction },
    /// A wall was removed and the cursor moved from (x, y) to (to_x, to_y)
    Carved {
        x: i32,
        y: i32,
        direction: Direction,
        to_x: i32,
        to_y: i32,
    },
    /// The last carve reached a pole
    WalkEnded { start_x: i32, start_y: i32, length: usize },
    /// Every start position has been processed
    Finished,
}

/// Counters accumulated over one carving pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarveStats {
    pub walks: u32,
    pub carved: u32,
    pub blocked: u32,
    pub draws: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Looking for the next start position
    Scanning,
    /// Drawing directions from the cursor
    Walking,
    /// The walk hit a pole; report it on the next step
    Closing,
    Done,
}

/// Stepwise maze carver for one seed
#[derive(Debug, Clone)]
pub struct Carver {
    seed: u8,
    grid: WallGrid,
    sequence: DirectionSequence,
    phase: Phase,
    /// Index into the start-position scan order
    next_start: i32,
    start: (i32, i32),
    cursor: (i32, i32),
    blocked_draws: u32,
    /// Directions carved by the current walk
    path: ArrayVec<Direction, CARVABLE_CELLS>,
    stats: CarveStats,
}

impl Carver {
    pub fn new(seed: u8) -> Self {
        Self {
            seed,
            grid: WallGrid::new(),
            sequence: DirectionSequence::new(seed),
            phase: Phase::Scanning,
            next_start: 0,
            start: (0, 0),
            cursor: (0, 0),
            blocked_draws: 0,
            path: ArrayVec::new(),
            stats: CarveStats::default(),
        }
    }

    /// Resume mid-walk at (x, y) on a prepared grid
    #[cfg(test)]
    pub(crate) fn walking_from(seed: u8, grid: WallGrid, x: i32, y: i32) -> Self {
        Self {
            grid,
            phase: Phase::Walking,
            start: (x, y),
            cursor: (x, y),
            ..Self::new(seed)
        }
    }

    pub fn seed(&self) -> u8 {
        self.seed
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }

    pub fn stats(&self) -> CarveStats {
        self.stats
    }

    /// Cursor of the walk in progress, if any
    pub fn cursor(&self) -> Option<(i32, i32)> {
        match self.phase {
            Phase::Walking => Some(self.cursor),
            _ => None,
        }
    }

    /// Directions carved so far by the current (or just ended) walk
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance by one start-position lookup or one direction draw
    pub fn step(&mut self) -> Result<CarveEvent, CarveError> {
        match self.phase {
            Phase::Scanning => Ok(self.begin_walk()),
            Phase::Walking => self.draw(),
            Phase::Closing => {
                self.phase = Phase::Scanning;
                let (start_x, start_y) = self.start;
                debug!(
                    "walk from ({}, {}) closed after {} walls",
                    start_x,
                    start_y,
                    self.path.len()
                );
                Ok(CarveEvent::WalkEnded {
                    start_x,
                    start_y,
                    length: self.path.len(),
                })
            }
            Phase::Done => Ok(CarveEvent::Finished),
        }
    }

    /// Run the remaining steps and return the statistics
    pub fn finish(&mut self) -> Result<CarveStats, CarveError> {
        while self.step()? != CarveEvent::Finished {}
        Ok(self.stats)
    }

    fn begin_walk(&mut self) -> CarveEvent {
        while self.next_start < START_COLS * START_ROWS {
            let x = START_COLS - 1 - self.next_start / START_ROWS;
            let y = self.next_start % START_ROWS;
            self.next_start += 1;

            if is_pole(&self.grid, x, y) {
                continue;
            }

            self.start = (x, y);
            self.cursor = (x, y);
            self.blocked_draws = 0;
            self.path.clear();
            self.stats.walks += 1;
            self.phase = Phase::Walking;
            return CarveEvent::WalkStarted { x, y };
        }

        self.phase = Phase::Done;
        debug!(
            "seed {} carved: {} walks, {} walls, {} blocked, {} draws",
            self.seed, self.stats.walks, self.stats.carved, self.stats.blocked, self.stats.draws
        );
        CarveEvent::Finished
    }

    fn draw(&mut self) -> Result<CarveEvent, CarveError> {
        let (x, y) = self.cursor;
        self.grid.insert(x, y, VISITED);

        let direction = self.sequence.next_direction();
        self.stats.draws += 1;

        if is_blocked(&self.grid, x, y, direction) {
            self.stats.blocked += 1;
            self.blocked_draws += 1;
            if self.blocked_draws >= MAX_BLOCKED_DRAWS {
                let err = CarveError::RetryLimit {
                    seed: self.seed,
                    x,
                    y,
                    draws: self.blocked_draws,
                };
                error!("carving stalled: {}", err);
                return Err(err);
            }
            return Ok(CarveEvent::Blocked { x, y, direction });
        }

        let (ox, oy, bit) = EDGE_OWNERS[direction as usize];
        self.grid.insert(x + ox, y + oy, bit);

        let (dx, dy) = direction.offset();
        let (to_x, to_y) = (x + dx as i32, y + dy as i32);
        trace!("({}, {}) {} -> ({}, {})", x, y, direction.as_str(), to_x, to_y);

        self.cursor = (to_x, to_y);
        self.blocked_draws = 0;
        self.stats.carved += 1;
        // A walk carves at most once per carvable cell, so the path never overflows.
        self.path.push(direction);

        if is_pole(&self.grid, to_x, to_y) {
            self.phase = Phase::Closing;
        }

        Ok(CarveEvent::Carved {
            x,
            y,
            direction,
            to_x,
            to_y,
        })
    }
}

/// Carve the floor for `seed`, reporting a stalled run as an error
pub fn try_generate(seed: u8) -> Result<WallGrid, CarveError> {
    let mut carver = Carver::new(seed);
    carver.finish()?;
    Ok(carver.into_grid())
}

/// Carve the floor for `seed`.
///
/// Total for every seed: the retry cap is never reached (checked for all 256
/// seeds by the test suite). Should it ever trip, the error is logged and
/// the grid carved so far is returned.
pub fn generate(seed: u8) -> WallGrid {
    carve_all(Carver::new(seed))
}

/// Run `carver` to the end, keeping the partial grid if it stalls
fn carve_all(mut carver: Carver) -> WallGrid {
    if let Err(err) = carver.finish() {
        // Already logged at error level by the failing step.
        debug!("keeping partial grid after: {}", err);
    }
    carver.into_grid()
}
