//! Drive loop tuning.

use neon_tetris_types::{
    DEFAULT_ARR_MS, DEFAULT_DAS_MS, DEFAULT_MAX_FRAME_MS, DEFAULT_SOFT_DROP_FACTOR,
};

/// Handling settings for [`crate::DriveLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveConfig {
    /// Delayed auto shift: how long a direction is held before it repeats.
    pub das_ms: u32,
    /// Auto repeat rate once DAS has elapsed. Zero shifts until blocked in one frame.
    pub arr_ms: u32,
    /// Gravity multiplier while soft drop is held.
    pub soft_drop_factor: u32,
    /// Frames longer than this are clamped.
    pub max_frame_ms: u32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            das_ms: DEFAULT_DAS_MS,
            arr_ms: DEFAULT_ARR_MS,
            soft_drop_factor: DEFAULT_SOFT_DROP_FACTOR,
            max_frame_ms: DEFAULT_MAX_FRAME_MS,
        }
    }
}

impl DriveConfig {
    /// Create from environment variables
    ///
    /// Reads `TETRIS_DAS_MS`, `TETRIS_ARR_MS`, `TETRIS_SOFT_DROP_FACTOR` and
    /// `TETRIS_MAX_FRAME_MS`; missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DriveConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };
        let defaults = Self::default();

        Self {
            das_ms: read("TETRIS_DAS_MS", defaults.das_ms),
            arr_ms: read("TETRIS_ARR_MS", defaults.arr_ms),
            soft_drop_factor: read("TETRIS_SOFT_DROP_FACTOR", defaults.soft_drop_factor).max(1),
            max_frame_ms: read("TETRIS_MAX_FRAME_MS", defaults.max_frame_ms),
        }
    }
}
