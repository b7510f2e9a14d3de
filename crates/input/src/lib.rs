//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`tui_raycast_types::InputAction`] and provides a polled
//! key-state tracker suitable for terminal environments (including terminals
//! without key-release events).

pub mod map;
pub mod tracker;

pub use tui_raycast_types as types;

pub use map::{map_key, should_quit};
pub use tracker::KeyStateTracker;
