//! tui-raycast (workspace facade crate).
//!
//! This package keeps a single `tui_raycast::{core,engine,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_raycast_core as core;
pub use tui_raycast_engine as engine;
pub use tui_raycast_input as input;
pub use tui_raycast_term as term;
pub use tui_raycast_types as types;
