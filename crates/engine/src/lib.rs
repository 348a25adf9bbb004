//! Drive loop: frame-by-frame glue between a front end and the rules engine.
//!
//! A front end owns the clock and the input devices. Each frame it records button edges
//! and levels in [`FrameInput`] (via [`DriveLoop::input_mut`]) and calls
//! [`DriveLoop::frame`] with the elapsed milliseconds. The loop handles pause, restart,
//! DAS/ARR shifting and soft-drop acceleration, and hands back the ordered
//! [`GameEvent`](neon_tetris_types::GameEvent)s for sound, effects or persistence.
//!
//! ```
//! use neon_tetris_engine::{DriveConfig, DriveLoop};
//! use neon_tetris_types::{GameEvent, GameMode, InputAction};
//!
//! let mut game = DriveLoop::with_seed(GameMode::Endless, 7, DriveConfig::default());
//! game.input_mut().tap(InputAction::HardDrop);
//! let events = game.frame(16);
//! assert!(matches!(events[0], GameEvent::HardDropped { .. }));
//! ```

pub mod config;
pub mod drive;
pub mod input;
pub mod shift;

pub use config::DriveConfig;
pub use drive::DriveLoop;
pub use input::FrameInput;
pub use shift::AutoShift;
