//! Headless runner: plays a scripted game through the drive loop without a display.
//!
//! Used for smoke runs and benchmarks. The script is deliberately simple: each new piece
//! is turned `pieces % 4` times, walked toward column `(pieces * 7) % 10` one tap per
//! frame, and hard-dropped.

use anyhow::{anyhow, Result};

use neon_tetris_core::GameState;
use neon_tetris_engine::{DriveConfig, DriveLoop};
use neon_tetris_types::{GameEvent, GameMode, GameSummary, InputAction, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessConfig {
    pub mode: GameMode,
    /// `None` draws a random seed.
    pub seed: Option<u64>,
    /// Upper bound on simulated frames.
    pub frames: u32,
    pub frame_ms: u32,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Endless,
            seed: None,
            frames: 10_000,
            frame_ms: 16,
        }
    }
}

/// Parse `[--mode M] [--seed N] [--frames N] [--frame-ms N]` (program name excluded).
pub fn parse_headless_args(args: &[String]) -> Result<HeadlessConfig> {
    let mut config = HeadlessConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| anyhow!("headless: missing value for {}", flag))
        };
        match flag {
            "--mode" => {
                let v = value()?;
                config.mode = GameMode::from_str(v)
                    .ok_or_else(|| anyhow!("headless: invalid --mode value: {}", v))?;
            }
            "--seed" => {
                let v = value()?;
                config.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("headless: invalid --seed value: {}", v))?,
                );
            }
            "--frames" => {
                let v = value()?;
                config.frames = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("headless: invalid --frames value: {}", v))?;
            }
            "--frame-ms" => {
                let v = value()?;
                config.frame_ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("headless: invalid --frame-ms value: {}", v))?;
            }
            other => {
                return Err(anyhow!("headless: unknown argument: {}", other));
            }
        }
        i += 2;
    }

    if config.frame_ms == 0 {
        return Err(anyhow!("headless: --frame-ms must be positive"));
    }

    Ok(config)
}

/// Per-piece plan of the scripted player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptedPlayer {
    pieces: u32,
    turns_done: u32,
    last_x: Option<i8>,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    /// Next piece: start a fresh plan.
    pub fn piece_locked(&mut self) {
        self.pieces += 1;
        self.turns_done = 0;
        self.last_x = None;
    }

    /// Choose this frame's button.
    pub fn next_action(&mut self, state: &GameState) -> InputAction {
        if self.turns_done < self.pieces % 4 {
            self.turns_done += 1;
            return InputAction::RotateCw;
        }

        let active = state.active();
        // A shift that went nowhere means the path is blocked.
        if self.last_x == Some(active.x) {
            return InputAction::HardDrop;
        }

        let target = self.target_x(state);
        if active.x == target {
            return InputAction::HardDrop;
        }
        self.last_x = Some(active.x);
        if active.x < target {
            InputAction::MoveRight
        } else {
            InputAction::MoveLeft
        }
    }

    /// Frame origin that puts the piece's leftmost cell on this piece's column.
    fn target_x(&self, state: &GameState) -> i8 {
        let shape = state.active().shape();
        let min_dx = shape.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
        let max_dx = shape.iter().map(|&(dx, _)| dx).max().unwrap_or(0);
        let column = ((self.pieces * 7) % BOARD_WIDTH as u32) as i8;
        (column - min_dx).clamp(-min_dx, BOARD_WIDTH as i8 - 1 - max_dx)
    }
}

/// Outcome of a headless run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessRun {
    pub seed: u64,
    pub frames: u32,
    pub pieces: u32,
    pub finished: bool,
    pub summary: GameSummary,
}

/// Play until the game ends or the frame budget runs out.
pub fn run_headless(config: &HeadlessConfig, drive: DriveConfig) -> HeadlessRun {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut game = DriveLoop::with_seed(config.mode, seed, drive);
    let mut player = ScriptedPlayer::new();
    let mut frames = 0;
    let mut finished = None;

    while frames < config.frames && finished.is_none() {
        let action = player.next_action(game.state());
        game.input_mut().tap(action);

        for event in game.frame(config.frame_ms) {
            match event {
                GameEvent::Locked { .. } => player.piece_locked(),
                GameEvent::GameOver(summary) => finished = Some(summary),
                _ => {}
            }
        }
        frames += 1;
    }

    HeadlessRun {
        seed,
        frames,
        pieces: player.pieces(),
        finished: finished.is_some(),
        summary: finished.unwrap_or_else(|| game.state().current_summary()),
    }
}
