//! Step-by-step carving playback in the alternate screen.
//!
//! Every carved wall is drawn as it happens, with a short pause after each
//! walk closes, and the finished floor is shown in pixels before returning.
//! `q`, `Esc` or Ctrl-C abort the playback.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::config::{RenderConfig, FLOOR_END_MS, FLOOR_START_MS, WALK_END_MS};
use crate::core::{rasterize, CarveEvent, Carver, WallGrid};
use crate::maze_view::MazeView;
use crate::renderer::Screen;
use crate::types::Seed;

/// How a playback ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    Finished(WallGrid),
    Aborted,
}

pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Play back the carving of `seed`, restoring the terminal afterwards.
pub fn play(seed: Seed, config: &RenderConfig) -> Result<Playback> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, seed, config);

    // Restore the terminal even when the run failed; its error wins.
    let restored = screen.leave();
    let playback = result?;
    restored?;
    Ok(playback)
}

fn run(screen: &mut Screen, seed: Seed, config: &RenderConfig) -> Result<Playback> {
    let view = MazeView::default();
    let mut carver = Carver::new(seed.value());

    screen.draw(&view.render_carving(&carver))?;
    if wait(Duration::from_millis(FLOOR_START_MS))? {
        return Ok(Playback::Aborted);
    }

    loop {
        let pause = match carver.step()? {
            CarveEvent::Carved { .. } => config.step_delay,
            CarveEvent::WalkEnded { .. } => Duration::from_millis(WALK_END_MS),
            CarveEvent::WalkStarted { .. } | CarveEvent::Blocked { .. } => continue,
            CarveEvent::Finished => break,
        };

        screen.draw(&view.render_carving(&carver))?;
        if wait(pause)? {
            debug!("playback of seed {} aborted", seed);
            return Ok(Playback::Aborted);
        }
    }

    screen.draw(&view.render_pixels(seed, &rasterize(carver.grid()), config))?;
    if wait(Duration::from_millis(FLOOR_END_MS))? {
        return Ok(Playback::Aborted);
    }

    Ok(Playback::Finished(carver.into_grid()))
}

/// Sleep for `timeout` while watching for a quit key.
///
/// Returns true if the user asked to quit.
fn wait(timeout: Duration) -> Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && should_quit(key) {
                return Ok(true);
            }
        }
    }
}
