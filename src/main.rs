//! Terminal raycaster runner (default binary).
//!
//! Two threads only: the background frame clock and this loop, which polls
//! input, steps the simulation when the frame gate opens, and presents a
//! freshly composed frame every iteration.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_raycast::core::{Map, Observer, DEFAULT_LEVEL};
use tui_raycast::engine::{FrameClock, World};
use tui_raycast::input::{should_quit, KeyStateTracker};
use tui_raycast::term::{FrameBuffer, Scene, SceneView, TerminalRenderer};
use tui_raycast::types::RenderConfig;

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = RenderConfig::default();
    let map = Map::parse(DEFAULT_LEVEL)?;
    info!(
        "starting: {}x{} map, {}x{} screen",
        map.width(),
        map.height(),
        config.screen_width,
        config.screen_height
    );

    let observer = Observer::new(8.0, 8.0, 0.0);
    let mut world = World::new(map, observer, config);
    let mut clock = FrameClock::start(config.tick_interval())?;

    let mut keys = KeyStateTracker::new();
    let view = SceneView::new();
    let mut fb = FrameBuffer::new(config.screen_width, config.screen_height);

    loop {
        // Input. The poll timeout paces the render loop; the simulation rate
        // is capped by the clock regardless.
        if event::poll(Duration::from_millis(1))? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    break;
                }
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => keys.key_down(key),
                    KeyEventKind::Release => keys.key_up(key),
                }
            }
        }

        // Simulation, gated to the clock rate. A closed gate skips the step;
        // it never delays the frame.
        if let Some(dt) = clock.try_consume_frame() {
            world.update(&keys.state(), dt);
        }

        // Projection and presentation, every iteration.
        let scene = Scene {
            map: world.map(),
            observer: world.observer(),
            config: world.config(),
            last_dt: world.last_dt(),
        };
        view.render_into(&scene, &mut fb);
        term.draw_swap(&mut fb)?;
    }

    // Join the clock before tearing anything else down.
    clock.stop();
    Ok(())
}
