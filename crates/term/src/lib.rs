//! Terminal presentation of generated floors.
//!
//! Two output paths share the same pure views:
//!
//! - plain text ([`text`]) for printing a finished floor to stdout
//! - a framebuffer ([`fb`], [`maze_view`]) flushed by [`renderer`] for the
//!   animated carving [`playback`]
//!
//! Glyphs and playback speed come from [`config::RenderConfig`].

pub mod config;
pub mod fb;
pub mod maze_view;
pub mod playback;
pub mod renderer;
pub mod text;

pub use druaga_maze_core as core;
pub use druaga_maze_types as types;

pub use config::RenderConfig;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use maze_view::MazeView;
pub use playback::{play, Playback};
pub use renderer::{encode_frame, Screen};
pub use text::{glyph_text, header, pixel_text, walls_text};
