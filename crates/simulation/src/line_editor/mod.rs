//! Interactive line editing: pointer gestures that create, extend and
//! splice lines.
//!
//! A primary-button press picks a drag mode from what is under the pointer
//! (handles first, then stations), moves accumulate stations into that
//! mode, and release commits through the topology mutators. The editor's
//! state lives in the `LineEditor` resource; the `TransitWorld` is only
//! written on release.

pub mod preview;
pub mod state;

pub use preview::Preview;
pub use state::{CommitOutcome, DragMode, LineEditor};
