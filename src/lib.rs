//! Neon Tetris (workspace facade crate).
//!
//! Re-exports the rules engine (`core`), the frame driver (`engine`) and the shared
//! value types (`types`) from the crates under `crates/`, plus the headless runner.

pub mod headless;

pub use neon_tetris_core as core;
pub use neon_tetris_engine as engine;
pub use neon_tetris_types as types;
