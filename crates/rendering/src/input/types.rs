use bevy::prelude::*;

/// Seconds a status notice stays on screen.
pub const STATUS_DURATION_SECS: f32 = 3.0;

/// Pointer position in scene coordinates, `valid` while it is over the window.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CursorWorldPos {
    pub world_pos: Vec2,
    pub valid: bool,
}

/// Status message shown briefly on screen
#[derive(Resource, Default)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, is_error: bool) {
        self.text = text.into();
        self.timer = STATUS_DURATION_SECS;
        self.is_error = is_error;
    }

    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}
