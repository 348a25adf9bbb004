//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and nothing else: no clock, no input devices,
//! no rendering. Time only enters through the `dt_ms` arguments of
//! [`GameState::tick`], [`GameState::soft_drop`] and [`GameState::try_lock_if_grounded`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with bounds-checked access and line clearing
//! - [`pieces`]: tetromino shapes in a 4x4 frame and their rotation states
//! - [`kicks`]: wall kick offset tables (JLSTZ, I, O)
//! - [`rng`]: seeded 7-bag randomizer
//! - [`scoring`]: line/drop points, leveling and the gravity curve
//! - [`game_state`]: the rules engine
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every bag-aligned run of seven pieces holds each kind once
//! - **Wall Kicks**: five candidates per quarter turn; the O piece never kicks
//! - **Lock Delay**: 500 ms of grounded time; every successful move or rotation restarts it
//! - **Hold**: one swap per piece, reset when the piece locks
//! - **Scoring**: 100/300/500/800 times level, plus 2 per hard-dropped row and 1 per
//!   soft-dropped row
//! - **Modes**: endless, first to 40 lines, or two minutes on the clock
//!
//! # Example
//!
//! ```
//! use neon_tetris_core::GameState;
//! use neon_tetris_core::types::{GameMode, RotationDirection};
//!
//! let mut game = GameState::with_seed(GameMode::Endless, 12345);
//!
//! game.move_piece(1);
//! game.rotate(RotationDirection::Clockwise);
//! game.hard_drop();
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod kicks;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use neon_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClear};
pub use game_state::{ActivePiece, GameState};
pub use kicks::kick_offsets;
pub use pieces::get_shape;
pub use rng::BagRandomizer;
pub use scoring::{calculate_drop_score, calculate_line_score, gravity_interval_ms};
pub use snapshot::GameSnapshot;
