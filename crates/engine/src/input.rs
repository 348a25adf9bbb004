//! Device-independent button state for one frame.
//!
//! Front ends translate their own key or pad events into [`FrameInput::press`] and
//! [`FrameInput::release`]; the drive loop reads edges with [`FrameInput::is_pressed`] and
//! levels with [`FrameInput::is_held`], then calls [`FrameInput::begin_frame`].

use neon_tetris_types::InputAction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    held: [bool; InputAction::COUNT],
    pressed: [bool; InputAction::COUNT],
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button went down. Repeated presses while held are not new edges.
    pub fn press(&mut self, action: InputAction) {
        let i = action.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    pub fn release(&mut self, action: InputAction) {
        self.held[action.index()] = false;
    }

    /// Press and release within the same frame: an edge without a held level.
    pub fn tap(&mut self, action: InputAction) {
        self.press(action);
        self.release(action);
    }

    /// Went down since the last [`FrameInput::begin_frame`].
    pub fn is_pressed(&self, action: InputAction) -> bool {
        self.pressed[action.index()]
    }

    pub fn is_held(&self, action: InputAction) -> bool {
        self.held[action.index()]
    }

    /// Forget this frame's edges; held buttons stay held.
    pub fn begin_frame(&mut self) {
        self.pressed = [false; InputAction::COUNT];
    }
}
