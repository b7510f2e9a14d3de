//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the compositor draws into a plain
//! glyph framebuffer, and a crossterm backend flushes it with changed-run
//! diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Compose frames without I/O so the pipeline can be asserted in tests
//! - Present with one buffered write per frame

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_raycast_core as core;
pub use tui_raycast_types as types;

pub use fb::FrameBuffer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{Scene, SceneView};
