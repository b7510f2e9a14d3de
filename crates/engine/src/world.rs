//! World: the simulation context owning map, observer, and actors.
//!
//! Everything the per-frame pipeline reads lives here and is passed by
//! reference; there is no process-wide mutable state.

use tui_raycast_core::{ActorArena, Map, Observer};
use tui_raycast_types::{InputState, RenderConfig};

/// The complete simulation state for one session.
pub struct World {
    map: Map,
    observer: Observer,
    actors: ActorArena,
    config: RenderConfig,
    last_dt: f32,
}

impl World {
    pub fn new(map: Map, observer: Observer, config: RenderConfig) -> Self {
        Self {
            map,
            observer,
            actors: ActorArena::new(),
            config,
            last_dt: 0.0,
        }
    }

    /// One gated simulation step: observer movement with collision, then the
    /// actor arena.
    ///
    /// `dt` must be the elapsed time handed out by the frame gate that
    /// admitted this step.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.last_dt = dt;
        self.observer.update(input, dt, &self.map);
        self.actors.step_all(dt);
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn actors(&self) -> &ActorArena {
        &self.actors
    }

    pub fn actors_mut(&mut self) -> &mut ActorArena {
        &mut self.actors
    }

    /// Elapsed seconds of the most recently consumed tick; 0 before the
    /// first step.
    pub fn last_dt(&self) -> f32 {
        self.last_dt
    }

    /// Instantaneous frame rate: the reciprocal of the last tick's elapsed
    /// time.
    pub fn fps(&self) -> f32 {
        if self.last_dt > 0.0 {
            1.0 / self.last_dt
        } else {
            0.0
        }
    }
}
