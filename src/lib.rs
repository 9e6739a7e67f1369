//! Druaga floor generator (workspace facade crate).
//!
//! The generator lives in dedicated crates under `crates/`; this package
//! re-exports them as `druaga_maze::{core,term,types}` and adds the output
//! formats used by the binary.

pub mod output;

pub use druaga_maze_core as core;
pub use druaga_maze_term as term;
pub use druaga_maze_types as types;
