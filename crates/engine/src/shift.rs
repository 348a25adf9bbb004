//! Horizontal DAS/ARR.
//!
//! A fresh press shifts once. After the direction has been held for `das_ms`, repeat
//! time accrues and each `arr_ms` of it shifts again; with `arr_ms == 0` the piece slides
//! until blocked. Holding both directions cancels both.

use neon_tetris_core::GameState;
use neon_tetris_types::InputAction;

use crate::config::DriveConfig;
use crate::input::FrameInput;

/// Timers of one direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Charge {
    held_ms: u32,
    repeat_ms: u32,
}

impl Charge {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn advance(
        &mut self,
        state: &mut GameState,
        dx: i8,
        pressed: bool,
        dt_ms: u32,
        config: &DriveConfig,
    ) {
        self.held_ms = self.held_ms.saturating_add(dt_ms);

        if pressed {
            state.move_piece(dx);
        }

        if self.held_ms < config.das_ms {
            return;
        }

        if config.arr_ms == 0 {
            while state.move_piece(dx) {}
            self.repeat_ms = 0;
            return;
        }

        self.repeat_ms = self.repeat_ms.saturating_add(dt_ms);
        while self.repeat_ms >= config.arr_ms {
            self.repeat_ms -= config.arr_ms;
            if !state.move_piece(dx) {
                break;
            }
        }
    }
}

/// Auto-shift state for the left and right buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoShift {
    left: Charge,
    right: Charge,
}

impl AutoShift {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this frame's horizontal input to `state`.
    pub fn update(
        &mut self,
        state: &mut GameState,
        input: &FrameInput,
        config: &DriveConfig,
        dt_ms: u32,
    ) {
        let left = input.is_held(InputAction::MoveLeft) || input.is_pressed(InputAction::MoveLeft);
        let right =
            input.is_held(InputAction::MoveRight) || input.is_pressed(InputAction::MoveRight);

        match (left, right) {
            (true, false) => {
                self.right.reset();
                let pressed = input.is_pressed(InputAction::MoveLeft);
                self.left.advance(state, -1, pressed, dt_ms, config);
            }
            (false, true) => {
                self.left.reset();
                let pressed = input.is_pressed(InputAction::MoveRight);
                self.right.advance(state, 1, pressed, dt_ms, config);
            }
            _ => self.reset(),
        }
    }

    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }
}
