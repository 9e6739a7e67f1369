//! Render configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DRUAGA_FILLED` | `@` | glyph for a filled pixel |
//! | `DRUAGA_EMPTY` | space | glyph for an empty pixel |
//! | `DRUAGA_STEP_MS` | 5 | playback delay per carved wall |

use std::time::Duration;

pub const DEFAULT_FILLED: char = '@';
pub const DEFAULT_EMPTY: char = ' ';
pub const DEFAULT_STEP_MS: u64 = 5;

/// Pause before the first walk of a playback.
pub const FLOOR_START_MS: u64 = 50;

/// Pause after each walk closes during playback.
pub const WALK_END_MS: u64 = 16;

/// Pause on the finished floor before playback returns.
pub const FLOOR_END_MS: u64 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub filled: char,
    pub empty: char,
    pub step_delay: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            filled: DEFAULT_FILLED,
            empty: DEFAULT_EMPTY,
            step_delay: Duration::from_millis(DEFAULT_STEP_MS),
        }
    }
}

impl RenderConfig {
    /// Create from environment variables; unset or invalid values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let filled = lookup("DRUAGA_FILLED")
            .and_then(|s| single_char(&s))
            .unwrap_or(defaults.filled);
        let empty = lookup("DRUAGA_EMPTY")
            .and_then(|s| single_char(&s))
            .unwrap_or(defaults.empty);
        let step_delay = lookup("DRUAGA_STEP_MS")
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.step_delay);

        Self {
            filled,
            empty,
            step_delay,
        }
    }

    pub fn with_filled(mut self, filled: Option<char>) -> Self {
        if let Some(ch) = filled {
            self.filled = ch;
        }
        self
    }

    pub fn with_empty(mut self, empty: Option<char>) -> Self {
        if let Some(ch) = empty {
            self.empty = ch;
        }
        self
    }
}

/// The only char of `s`; None when empty or longer.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
