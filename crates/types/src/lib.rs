//! Shared types and rule constants.
//!
//! Everything in this crate is plain data: piece kinds, rotation states, game modes,
//! the events the rules engine emits, and the summary record handed to storage
//! collaborators. The core engine, the drive loop and any front end all agree on these.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: column 3, row -2 (two rows above the visible playfield)
//!
//! # Timing
//!
//! All durations are milliseconds.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOCK_DELAY_MS` | 500 | Grounded time before a piece locks |
//! | `BASE_GRAVITY_MS` | 1000 | Gravity interval at level 1 |
//! | `MIN_GRAVITY_MS` | 80 | Gravity interval floor |
//! | `SOFT_DROP_STEP_MS` | 25 | Step interval of a held soft drop |
//! | `TIME_LIMIT_MS` | 120000 | Length of a time-limit game |
//!
//! # Examples
//!
//! ```
//! use neon_tetris_types::{PieceKind, Rotation, RotationDirection, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::North.rotate(RotationDirection::Clockwise), Rotation::East);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Row a freshly spawned piece's 4x4 frame starts at (above the playfield).
pub const SPAWN_ROW: i8 = -2;

/// Column a freshly spawned piece's 4x4 frame starts at.
pub const SPAWN_COL: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Number of upcoming pieces kept in the next queue.
pub const NEXT_QUEUE_LEN: usize = 5;

/// Lock delay when a piece is grounded.
pub const LOCK_DELAY_MS: u32 = 500;

/// Gravity interval at level 1 (one row per second).
pub const BASE_GRAVITY_MS: u32 = 1000;

/// Gravity interval never drops below this.
pub const MIN_GRAVITY_MS: u32 = 80;

/// Per-level multiplier applied to the gravity interval.
pub const GRAVITY_DECAY: f64 = 0.85;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Step interval of the engine's held soft drop.
pub const SOFT_DROP_STEP_MS: u32 = 25;

/// Points per row for a hard drop.
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Points per row for a scoring soft drop.
pub const SOFT_DROP_POINTS_PER_ROW: u32 = 1;

/// Line clear rewards, indexed by lines cleared and multiplied by level.
///
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800 (Tetris)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Line target of [`GameMode::LineGoal`].
pub const LINE_GOAL: u32 = 40;

/// Time limit of [`GameMode::TimeLimit`].
pub const TIME_LIMIT_MS: u32 = 2 * 60_000;

/// Default delayed auto shift.
pub const DEFAULT_DAS_MS: u32 = 120;

/// Default auto repeat rate.
pub const DEFAULT_ARR_MS: u32 = 20;

/// Gravity speed-up applied to a frame's tick while soft drop is held.
pub const DEFAULT_SOFT_DROP_FACTOR: u32 = 2;

/// Largest frame delta the drive loop forwards to the engine.
pub const DEFAULT_MAX_FRAME_MS: u32 = 50;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in a fixed order. A fresh bag starts from this list.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use neon_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Display color as a `#rrggbb` hex string.
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "#4de8ff",
            PieceKind::O => "#ffe55c",
            PieceKind::T => "#b46bff",
            PieceKind::S => "#54ff8a",
            PieceKind::Z => "#ff4d6d",
            PieceKind::J => "#4d7dff",
            PieceKind::L => "#ff9a4d",
        }
    }
}

/// Rotation states, numbered 0-3 clockwise from the spawn orientation.
///
/// - **North** (0): Spawn orientation
/// - **East** (1): Rotated 90° clockwise
/// - **South** (2): Rotated 180°
/// - **West** (3): Rotated 90° counter-clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation state number (0-3).
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Inverse of [`Rotation::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`; rotation states come from the engine's own tables,
    /// so anything else is a programming error.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            3 => Rotation::West,
            _ => panic!("rotation state out of range: {index}"),
        }
    }

    /// Target state of a rotation: `(from + direction + 4) mod 4`.
    pub fn rotate(self, direction: RotationDirection) -> Self {
        let next = (self.index() as i8 + direction.delta() + 4).rem_euclid(4);
        Self::from_index(next as usize)
    }
}

/// Direction of a rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// +1 for clockwise, -1 for counter-clockwise.
    pub fn delta(self) -> i8 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }
}

/// Match rules selected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// No end condition other than topping out.
    Endless,
    /// Ends once [`LINE_GOAL`] lines have been cleared.
    LineGoal,
    /// Ends once [`TIME_LIMIT_MS`] of play time has elapsed.
    TimeLimit,
}

impl GameMode {
    /// Parse a mode name. Accepts `endless`, `line-goal`/`line_goal` and
    /// `time-limit`/`time_limit` (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "endless" => Some(GameMode::Endless),
            "line-goal" => Some(GameMode::LineGoal),
            "time-limit" => Some(GameMode::TimeLimit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Endless => "endless",
            GameMode::LineGoal => "line-goal",
            GameMode::TimeLimit => "time-limit",
        }
    }

    /// Cleared-line total that ends the game, if any.
    pub fn goal_lines(&self) -> Option<u32> {
        match self {
            GameMode::LineGoal => Some(LINE_GOAL),
            _ => None,
        }
    }

    /// Play time that ends the game, if any.
    pub fn time_limit_ms(&self) -> Option<u32> {
        match self {
            GameMode::TimeLimit => Some(TIME_LIMIT_MS),
            _ => None,
        }
    }
}

/// Lifecycle status. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Paused,
    Over,
}

/// Edge-triggered record of the most recent lock's line clear.
///
/// Consumers observe it once and then clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LastClear {
    pub lines: u32,
    /// Exactly four lines at once.
    pub tetris: bool,
}

impl LastClear {
    pub fn new(lines: u32) -> Self {
        Self {
            lines,
            tetris: lines == 4,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

/// Final record of a finished game, the shape leaderboard storage persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSummary {
    pub mode: GameMode,
    pub score: u32,
    pub lines: u32,
    pub duration_ms: u32,
}

/// Domain events, in the order they happened.
///
/// Front ends dispatch these to audio and animation instead of registering callbacks
/// with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Active piece shifted one column.
    Moved { dx: i8 },
    /// Active piece rotated (possibly kicked).
    Rotated { rotation: Rotation },
    /// Active piece dropped `rows` rows and locked.
    HardDropped { rows: u32 },
    /// Hold slot used.
    Held { stored: PieceKind },
    /// A piece merged into the board.
    Locked { kind: PieceKind, lines_cleared: u32 },
    /// Lines were cleared by the last lock.
    LineClear(LastClear),
    Paused,
    Resumed,
    /// A new game replaced the finished or running one.
    Restarted,
    /// The game reached its terminal status.
    GameOver(GameSummary),
}

/// Cell contents: `None` when empty, otherwise the kind that filled it.
pub type Cell = Option<PieceKind>;

/// Logical player inputs, independent of any device or key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move piece one cell left (auto-repeats while held)
    MoveLeft,
    /// Move piece one cell right (auto-repeats while held)
    MoveRight,
    /// Speed up gravity while held
    SoftDrop,
    /// Instantly drop piece to lowest valid position
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Hold current piece (if available)
    Hold,
    /// Toggle pause state
    Pause,
    /// Restart the game in the same mode
    Restart,
}

impl InputAction {
    pub const COUNT: usize = 9;

    /// Dense index for per-action lookup tables.
    pub fn index(self) -> usize {
        match self {
            InputAction::MoveLeft => 0,
            InputAction::MoveRight => 1,
            InputAction::SoftDrop => 2,
            InputAction::HardDrop => 3,
            InputAction::RotateCw => 4,
            InputAction::RotateCcw => 5,
            InputAction::Hold => 6,
            InputAction::Pause => 7,
            InputAction::Restart => 8,
        }
    }
}
