//! Headless integration tests for the network editor using `TestNetwork`.

mod editor_gestures;
mod frame_schedule;
