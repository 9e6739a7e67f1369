//! MazeView: maps carver state and finished floors into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::config::RenderConfig;
use crate::core::layout::{BLOCK_COLS, BLOCK_ROWS};
use crate::core::{block_layout, Carver, PixelGrid};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::text::header;
use crate::types::{Seed, LAYOUT_COLS, LAYOUT_ROWS};

/// Width of every frame; wide enough for the pixel layout and status lines.
pub const FRAME_WIDTH: u16 = LAYOUT_COLS as u16 + 2;

pub struct MazeView {
    wall: CellStyle,
    cursor: CellStyle,
    status: CellStyle,
}

impl Default for MazeView {
    fn default() -> Self {
        Self {
            wall: CellStyle::plain(Rgb::new(230, 190, 90)),
            cursor: CellStyle::bold(Rgb::new(255, 80, 80)),
            status: CellStyle::plain(Rgb::new(150, 150, 160)),
        }
    }
}

impl MazeView {
    /// Frame height for a carving frame: header, glyph rows, blank, status.
    pub const CARVING_HEIGHT: u16 = BLOCK_ROWS as u16 + 3;

    /// Frame height for a pixel frame: header plus pixel rows.
    pub const PIXEL_HEIGHT: u16 = LAYOUT_ROWS as u16 + 1;

    /// Render the carving in progress as quadrant glyphs.
    ///
    /// The cell under the walk cursor is highlighted.
    pub fn render_carving(&self, carver: &Carver) -> FrameBuffer {
        let mut fb = FrameBuffer::new(FRAME_WIDTH, Self::CARVING_HEIGHT);
        let seed = Seed::new(carver.seed());
        fb.put_str(0, 0, &header(seed), self.status);

        let blocks = block_layout(carver.grid());
        for (by, row) in blocks.iter().enumerate() {
            for (bx, block) in row.iter().enumerate() {
                fb.put_char(bx as u16, by as u16 + 1, block.glyph(), self.wall);
            }
        }

        if let Some((x, y)) = carver.cursor() {
            let (bx, by) = (x + 1, y + 1);
            if (0..BLOCK_COLS as i32).contains(&bx) && (0..BLOCK_ROWS as i32).contains(&by) {
                let ch = blocks[by as usize][bx as usize].glyph();
                let ch = if ch == ' ' { '·' } else { ch };
                fb.put_char(bx as u16, by as u16 + 1, ch, self.cursor);
            }
        }

        let stats = carver.stats();
        let line = format!(
            "walks {}  walls {}  draws {}",
            stats.walks, stats.carved, stats.draws
        );
        fb.put_str(0, Self::CARVING_HEIGHT - 1, &line, self.status);
        fb
    }

    /// Render a finished floor, one configured glyph per pixel.
    pub fn render_pixels(&self, seed: Seed, pixels: &PixelGrid, config: &RenderConfig) -> FrameBuffer {
        let mut fb = FrameBuffer::new(FRAME_WIDTH, Self::PIXEL_HEIGHT);
        fb.put_str(0, 0, &header(seed), self.status);
        for (y, row) in pixels.rows().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                let ch = if filled { config.filled } else { config.empty };
                fb.put_char(x as u16, y as u16 + 1, ch, self.wall);
            }
        }
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{floor_layout, CarveEvent};

    #[test]
    fn carving_frame_shows_header_and_border() {
        let carver = Carver::new(0);
        let fb = MazeView::default().render_carving(&carver);
        assert!(fb.row_text(0).starts_with("FLOOR 1 (seed=0)"));
        assert!(fb.row_text(1).starts_with('▗'));
        assert!(fb.row_text(2).starts_with('▐'));
    }

    #[test]
    fn carving_frame_highlights_cursor() {
        let mut carver = Carver::new(7);
        assert!(matches!(carver.step(), Ok(CarveEvent::WalkStarted { .. })));
        let (x, y) = carver.cursor().unwrap();

        let view = MazeView::default();
        let fb = view.render_carving(&carver);
        let cell = fb.get(x as u16 + 1, y as u16 + 2).unwrap();
        assert_eq!(cell.style, view.cursor);
    }

    #[test]
    fn finished_carving_reports_all_walls() {
        let mut carver = Carver::new(9);
        carver.finish().unwrap();
        let fb = MazeView::default().render_carving(&carver);
        assert!(fb
            .row_text(MazeView::CARVING_HEIGHT - 1)
            .contains("walls 136"));
    }

    #[test]
    fn pixel_frame_uses_configured_glyphs() {
        let config = RenderConfig {
            filled: '#',
            empty: '.',
            ..RenderConfig::default()
        };
        let fb = MazeView::default().render_pixels(Seed::new(0), &floor_layout(0), &config);
        assert_eq!(fb.height(), 21);
        assert!(fb.row_text(1).starts_with(&".".repeat(38)));
        assert!(fb.row_text(2).starts_with(&format!(".{}", "#".repeat(37))));
    }
}
