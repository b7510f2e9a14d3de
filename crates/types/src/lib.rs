//! Core types module - shared constants and data structures
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, engine, terminal rendering).
//!
//! # Screen & projection constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 120 | View columns |
//! | `SCREEN_HEIGHT` | 40 | View rows |
//! | `RENDER_DISTANCE` | 16.0 | Maximum ray-march length in map units |
//! | `FOV` | π/4 | Horizontal field of view in radians |
//! | `RAY_STEP` | 0.1 | Fixed ray-march increment in map units |
//! | `BOUNDARY_RAD` | 0.01 | Corner-grazing threshold for edge seams |
//!
//! # Simulation constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROTATE_SPEED` | 1.0 | Heading change in rad/s while a rotate key is held |
//! | `MOVE_SPEED` | 5.0 | Translation in map units/s while a move key is held |
//! | `TICK_INTERVAL_MS` | 1 | Background clock period |

use std::f32::consts::PI;

/// View width in terminal columns.
pub const SCREEN_WIDTH: u16 = 120;

/// View height in terminal rows.
pub const SCREEN_HEIGHT: u16 = 40;

/// Maximum ray-march length before a cast is treated as "no wall found".
pub const RENDER_DISTANCE: f32 = 16.0;

/// Horizontal field of view in radians.
pub const FOV: f32 = PI / 4.0;

/// Fixed ray-march step in map units.
///
/// Resolution and cost of the march are governed entirely by this step and
/// [`RENDER_DISTANCE`]; there is no adaptive stepping.
pub const RAY_STEP: f32 = 0.1;

/// A wall hit whose nearest cell corner lies within this angle of the ray is
/// rendered as a seam between adjacent wall cells.
pub const BOUNDARY_RAD: f32 = 0.01;

/// Heading change in radians per second while a rotate key is held.
pub const ROTATE_SPEED: f32 = 1.0;

/// Observer translation in map units per second while a move key is held.
pub const MOVE_SPEED: f32 = 5.0;

/// Background clock period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1;

/// Projection parameters for one rendering session.
///
/// Compiled-in defaults match the constants above; tests construct smaller
/// configs to keep scenes tractable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    pub render_distance: f32,
    pub fov: f32,
    pub tick_interval_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            render_distance: RENDER_DISTANCE,
            fov: FOV,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl RenderConfig {
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}

/// Logical movement actions the observer responds to.
///
/// These are what the input layer maps raw key events onto; the simulation
/// only ever sees these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    RotateLeft,
    RotateRight,
    MoveForward,
    MoveBackward,
}

/// Polled key-down state for one simulation step.
///
/// A snapshot, not an event stream: the simulation reads whichever keys are
/// held at the instant the frame gate opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub forward: bool,
    pub backward: bool,
}

impl InputState {
    /// True when any movement key is held.
    pub fn any(&self) -> bool {
        self.rotate_left || self.rotate_right || self.forward || self.backward
    }

    pub fn set(&mut self, action: InputAction, held: bool) {
        match action {
            InputAction::RotateLeft => self.rotate_left = held,
            InputAction::RotateRight => self.rotate_right = held,
            InputAction::MoveForward => self.forward = held,
            InputAction::MoveBackward => self.backward = held,
        }
    }
}
