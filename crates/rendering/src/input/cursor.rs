use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowEvent;

use crate::camera::window_to_scene;

use super::types::StatusMessage;

/// Host pointer events, reduced to what the line editor consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a scene position.
    Moved(Vec2),
    /// Pointer left the window.
    Left,
    PrimaryDown,
    PrimaryUp,
    /// Secondary button press (cancel gesture, clear selection).
    SecondaryDown,
    /// Escape: cancel the gesture, keep the selection.
    Cancel,
}

/// Translate one window event into a `PointerEvent`, if it is one.
///
/// Reading the combined `WindowEvent` stream keeps moves, button changes and
/// Escape in the order the host delivered them within a frame.
pub fn pointer_event(
    event: &WindowEvent,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<PointerEvent> {
    match event {
        WindowEvent::CursorMoved(moved) => {
            window_to_scene(camera, camera_transform, moved.position).map(PointerEvent::Moved)
        }
        WindowEvent::CursorLeft(_) => Some(PointerEvent::Left),
        WindowEvent::MouseButtonInput(input) => button_event(input),
        WindowEvent::KeyboardInput(input) => key_event(input),
        _ => None,
    }
}

fn button_event(input: &MouseButtonInput) -> Option<PointerEvent> {
    match (input.button, input.state) {
        (MouseButton::Left, ButtonState::Pressed) => Some(PointerEvent::PrimaryDown),
        (MouseButton::Left, ButtonState::Released) => Some(PointerEvent::PrimaryUp),
        (MouseButton::Right, ButtonState::Pressed) => Some(PointerEvent::SecondaryDown),
        _ => None,
    }
}

fn key_event(input: &KeyboardInput) -> Option<PointerEvent> {
    let pressed = input.state == ButtonState::Pressed;
    (pressed && input.key_code == KeyCode::Escape).then_some(PointerEvent::Cancel)
}

pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}
