//! Screen: owns the alternate screen and flushes frames to it.
//!
//! Frames are a few hundred cells, so every draw repaints the whole frame.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};

pub struct Screen {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush()
    }

    /// Undo [`Screen::enter`].
    pub fn leave(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(fb, &mut self.buf)?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode `fb` as one repaint: clear, then every row at its own position.
/// Style escapes are only written where the style changes.
pub fn encode_frame(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style: Option<CellStyle> = None;
    for (y, row) in fb.rows().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        for cell in row {
            if style != Some(cell.style) {
                queue_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    let weight = if style.bold {
        Attribute::Bold
    } else {
        Attribute::NormalIntensity
    };
    out.queue(SetAttribute(weight))?;
    let fg = style.fg;
    out.queue(SetForegroundColor(Color::Rgb {
        r: fg.r,
        g: fg.g,
        b: fg.b,
    }))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Rgb;

    fn encode(fb: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(fb, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn every_row_is_positioned_and_printed() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        fb.put_str(0, 0, "▗▄▄", style);
        fb.put_str(0, 1, "▐ ▟", style);

        let text = encode(&fb);
        assert!(text.contains("\x1b[1;1H▗▄▄"));
        assert!(text.contains("\x1b[2;1H▐ ▟"));
    }

    #[test]
    fn uniform_frame_sets_style_once() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "abcd", CellStyle::default());

        let text = encode(&fb);
        assert_eq!(text.matches("38;2;220;220;220").count(), 1);
        assert_eq!(text.matches("\x1b[22m").count(), 1);
    }

    #[test]
    fn bold_cell_switches_weight_and_back() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_char(1, 0, '·', CellStyle::bold(Rgb::new(255, 80, 80)));

        let text = encode(&fb);
        assert_eq!(text.matches("\x1b[1m").count(), 1);
        assert_eq!(text.matches("38;2;255;80;80").count(), 1);
        // Plain before and after the bold cell.
        assert_eq!(text.matches("\x1b[22m").count(), 2);
    }
}
