//! Floor generator (default binary).
//!
//! Prints the layout of one tower floor for a seed, or plays back the
//! carving step by step with `--animate`.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use druaga_maze::core::generate;
use druaga_maze::output::{fallback_notice, write_floor, Format};
use druaga_maze::term::{play, Playback, RenderConfig};
use druaga_maze::types::Seed;

/// Seeded floor layouts for a maze-style arcade tower
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Floor seed within [-128, 255]; defaults to 0
    #[arg(num_args = 0.., allow_negative_numbers = true)]
    seed: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Play back the carving before printing the floor
    #[arg(long)]
    animate: bool,

    /// Glyph for filled pixels (overrides DRUAGA_FILLED)
    #[arg(long)]
    filled: Option<char>,

    /// Glyph for empty pixels (overrides DRUAGA_EMPTY)
    #[arg(long)]
    empty: Option<char>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = RenderConfig::from_env()
        .with_filled(args.filled)
        .with_empty(args.empty);

    let mut out = io::stdout().lock();

    let seed = match Seed::from_args(&args.seed) {
        Ok(seed) => seed,
        Err(err) => {
            warn!("rejected seed argument: {}", err);
            writeln!(out, "{}", fallback_notice(&err))?;
            Seed::default()
        }
    };
    info!("generating floor {} (seed={})", seed.floor(), seed);

    let walls = if args.animate {
        // Playback owns the terminal while it runs.
        out.flush()?;
        match play(seed, &config)? {
            Playback::Finished(walls) => walls,
            Playback::Aborted => return Ok(()),
        }
    } else {
        generate(seed.value())
    };

    write_floor(&mut out, args.format, seed, &walls, &config)
}
