//! Core projection logic - pure, deterministic, and testable
//!
//! This crate contains the map, the observer simulation, the ray caster, the
//! shader, and the actor arena. It has **zero dependencies** on terminal I/O
//! or threading, making it:
//!
//! - **Deterministic**: the same map, observer, and config always produce the
//!   same ray results
//! - **Testable**: every projection property can be asserted without a
//!   terminal
//! - **Portable**: usable from the terminal binary, benches, or headless
//!   tests
//!
//! # Module structure
//!
//! - [`map`]: immutable row-major tile grid parsed from a text layout
//! - [`observer`]: camera state and the gated simulation step with collision
//! - [`raycast`]: fixed-step ray march with wall-edge boundary detection
//! - [`shade`]: distance-banded wall and floor glyph shading
//! - [`actors`]: generational arena of movable actors (extensibility seam)
//!
//! # Example
//!
//! ```
//! use tui_raycast_core::{cast_ray, Map, Observer, DEFAULT_LEVEL};
//! use tui_raycast_types::RenderConfig;
//!
//! let map = Map::parse(DEFAULT_LEVEL).unwrap();
//! let observer = Observer::new(8.0, 8.0, 0.0);
//! let config = RenderConfig::default();
//!
//! let hit = cast_ray(&map, &observer, &config, config.screen_width / 2);
//! assert!(hit.distance <= config.render_distance);
//! ```

pub mod actors;
pub mod map;
pub mod observer;
pub mod raycast;
pub mod shade;

pub use tui_raycast_types as types;

// Re-export commonly used items for convenience
pub use actors::{Actor, ActorArena, ActorId};
pub use map::{Map, MapError, Tile, DEFAULT_LEVEL};
pub use observer::Observer;
pub use raycast::{cast_ray, ray_angle, RayHit};
pub use shade::{floor_glyph, wall_glyph};
