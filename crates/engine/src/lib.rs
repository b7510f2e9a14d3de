//! Engine module: frame timing and the simulation driver.
//!
//! Two concerns live here, and nothing else:
//!
//! - [`clock`]: the background frame clock, its shutdown handshake, and the
//!   single-consumption frame gate that bounds the simulation rate
//! - [`world`]: the owned simulation context (map + observer + actors) and
//!   the per-tick update

pub mod clock;
pub mod world;

pub use tui_raycast_core as core;
pub use tui_raycast_types as types;

pub use clock::FrameClock;
pub use world::World;
