//! Headless runner (default binary).
//!
//! Plays one scripted game through the drive loop and prints the final summary as JSON
//! on stdout. Progress notes go to stderr.

use anyhow::Result;

use neon_tetris::engine::DriveConfig;
use neon_tetris::headless::{parse_headless_args, run_headless};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_headless_args(&args)?;
    let drive = DriveConfig::from_env();

    eprintln!(
        "[headless] mode={} frames={} frame_ms={} das={} arr={}",
        config.mode.as_str(),
        config.frames,
        config.frame_ms,
        drive.das_ms,
        drive.arr_ms
    );

    let run = run_headless(&config, drive);

    eprintln!(
        "[headless] seed={} frames={} pieces={} finished={}",
        run.seed, run.frames, run.pieces, run.finished
    );
    println!("{}", serde_json::to_string(&run.summary)?);
    Ok(())
}
