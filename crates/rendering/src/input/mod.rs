//! Input handling for the line editor.
//!
//! Split into sub-modules by concern:
//! - `types`: Resource types (CursorWorldPos, StatusMessage)
//! - `cursor`: Window-event translation and status-message countdown
//! - `pointer`: Pointer gestures and Escape forwarded to the `LineEditor`
//! - `keyboard`: The quit shortcut

mod cursor;
mod keyboard;
mod pointer;
mod types;


pub use types::{CursorWorldPos, StatusMessage, STATUS_DURATION_SECS};

pub use cursor::{pointer_event, tick_status_message, PointerEvent};

pub use pointer::{apply_pointer_event, describe_commit, forwards, handle_pointer_input};

pub use keyboard::handle_quit_shortcut;
