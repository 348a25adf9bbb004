//! Frame driver: turns button state and elapsed time into rules-engine calls.
//!
//! Per frame, in order: clamp `dt`, toggle pause, restart, then (unless paused) rotations,
//! hard drop, hold, horizontal auto-shift, gravity (accelerated while soft drop is
//! held) and the grounded lock check. The frame's events come back in the order they
//! happened, with a [`GameEvent::LineClear`] right after each lock that cleared rows.

use neon_tetris_core::GameState;
use neon_tetris_types::{GameEvent, GameMode, GameStatus, InputAction, LastClear, RotationDirection};

use crate::config::DriveConfig;
use crate::input::FrameInput;
use crate::shift::AutoShift;

#[derive(Debug, Clone)]
pub struct DriveLoop {
    state: GameState,
    seed: u64,
    config: DriveConfig,
    input: FrameInput,
    shift: AutoShift,
}

impl DriveLoop {
    /// Start a game with a random seed and default handling.
    pub fn new(mode: GameMode) -> Self {
        Self::with_seed(mode, rand::random(), DriveConfig::default())
    }

    pub fn with_seed(mode: GameMode, seed: u64, config: DriveConfig) -> Self {
        Self {
            state: GameState::with_seed(mode, seed),
            seed,
            config,
            input: FrameInput::new(),
            shift: AutoShift::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    /// Button state for the next frame.
    pub fn input_mut(&mut self) -> &mut FrameInput {
        &mut self.input
    }

    /// Replace the game with a fresh one of the same mode and seed.
    pub fn restart(&mut self) {
        self.state = GameState::with_seed(self.state.mode(), self.seed);
        self.shift.reset();
    }

    /// Advance one frame of `dt_ms` and return what happened.
    pub fn frame(&mut self, dt_ms: u32) -> Vec<GameEvent> {
        let dt = dt_ms.min(self.config.max_frame_ms);
        let mut events = Vec::new();

        if self.input.is_pressed(InputAction::Pause) {
            self.state.toggle_pause();
        }

        if self.input.is_pressed(InputAction::Restart) {
            self.drain_into(&mut events);
            self.restart();
            events.push(GameEvent::Restarted);
        }

        if self.state.status() != GameStatus::Paused {
            self.apply_actions(dt);
        }

        self.drain_into(&mut events);
        self.input.begin_frame();
        events
    }

    fn apply_actions(&mut self, dt: u32) {
        let state = &mut self.state;
        let input = &self.input;

        if input.is_pressed(InputAction::RotateCw) {
            state.rotate(RotationDirection::Clockwise);
        }
        if input.is_pressed(InputAction::RotateCcw) {
            state.rotate(RotationDirection::CounterClockwise);
        }
        if input.is_pressed(InputAction::HardDrop) {
            state.hard_drop();
        }
        if input.is_pressed(InputAction::Hold) {
            state.hold();
        }

        self.shift.update(state, input, &self.config, dt);

        if input.is_held(InputAction::SoftDrop) || input.is_pressed(InputAction::SoftDrop) {
            state.tick_with_factor(dt, self.config.soft_drop_factor);
        } else {
            state.tick(dt);
        }

        state.try_lock_if_grounded(dt);
    }

    /// Move the engine's queued events into `out`, announcing each clearing lock.
    fn drain_into(&mut self, out: &mut Vec<GameEvent>) {
        for event in self.state.take_events() {
            out.push(event);
            if let GameEvent::Locked { lines_cleared, .. } = event {
                if lines_cleared > 0 {
                    out.push(GameEvent::LineClear(LastClear::new(lines_cleared)));
                }
            }
        }
        self.state.take_last_clear();
    }
}
