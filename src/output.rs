//! Finished-floor output in the formats the binary offers.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::{rasterize, WallGrid};
use crate::term::{glyph_text, header, pixel_text, walls_text, RenderConfig};
use crate::types::{Seed, SeedError, MAZE_HEIGHT, MAZE_WIDTH};

/// Width of the rule printed under the fallback notice.
const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One glyph per pixel
    #[default]
    Text,
    /// Quadrant block glyphs, one per cell
    Glyphs,
    /// Raw wall masks, one digit per cell
    Walls,
    /// JSON report with walls and pixels
    Json,
}

/// Serializable description of one floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorReport {
    pub seed: u8,
    pub signed_seed: i8,
    pub floor: i32,
    pub walls: [[u8; MAZE_WIDTH]; MAZE_HEIGHT],
    /// Pixel rows, `#` filled and `.` empty
    pub pixels: Vec<String>,
}

impl FloorReport {
    pub fn new(seed: Seed, walls: &WallGrid) -> Self {
        Self {
            seed: seed.value(),
            signed_seed: seed.signed(),
            floor: seed.floor(),
            walls: walls.to_rows(),
            pixels: rasterize(walls).to_lines('#', '.'),
        }
    }
}

/// Render `walls` for `seed` in `format`, without a trailing newline.
pub fn render(format: Format, seed: Seed, walls: &WallGrid, config: &RenderConfig) -> Result<String> {
    let body = match format {
        Format::Text => pixel_text(&rasterize(walls), config.filled, config.empty),
        Format::Glyphs => glyph_text(walls),
        Format::Walls => walls_text(walls),
        Format::Json => return Ok(serde_json::to_string_pretty(&FloorReport::new(seed, walls))?),
    };
    Ok(format!("{}\n{}", header(seed), body))
}

/// Write the rendered floor and a newline to `out`.
///
/// Write failures (a closed pipe) come back as errors.
pub fn write_floor<W: Write>(
    out: &mut W,
    format: Format,
    seed: Seed,
    walls: &WallGrid,
    config: &RenderConfig,
) -> Result<()> {
    writeln!(out, "{}", render(format, seed, walls, config)?)?;
    out.flush()?;
    Ok(())
}

/// Notice printed before falling back to seed 0 on bad input, without a
/// trailing newline.
pub fn fallback_notice(err: &SeedError) -> String {
    format!(
        "Error: {}\nSeed for the maze generation defaults to 0.\n{}",
        err,
        "-".repeat(RULE_WIDTH)
    )
}
