//! World model for the transit network.
//!
//! Stations, lines and passengers are plain records held in a single
//! `TransitWorld` resource. Lines reference stations by id only, and nothing
//! is ever deleted, so ids stay valid for the lifetime of a session.

pub mod state;
pub mod types;

pub use state::TransitWorld;
pub use types::*;
