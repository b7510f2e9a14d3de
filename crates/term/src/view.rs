//! SceneView: composes one frame of the first-person view into a
//! framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_raycast_core::{cast_ray, floor_glyph, wall_glyph, Map, Observer, RayHit};
use tui_raycast_types::RenderConfig;

use crate::fb::FrameBuffer;

/// Borrowed view of everything one frame needs.
///
/// The world owns the data; the compositor only reads it.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub map: &'a Map,
    pub observer: &'a Observer,
    pub config: &'a RenderConfig,
    /// Elapsed seconds of the last consumed tick, for the FPS readout.
    pub last_dt: f32,
}

/// Composes the projected view, the minimap, and the status readout.
///
/// Every cell of the framebuffer is rewritten on every pass; nothing from the
/// previous frame survives.
#[derive(Debug, Default)]
pub struct SceneView;

impl SceneView {
    pub fn new() -> Self {
        Self
    }

    /// Render a full frame into `fb`, resizing it to the configured screen.
    pub fn render_into(&self, scene: &Scene<'_>, fb: &mut FrameBuffer) {
        let config = scene.config;
        fb.resize(config.screen_width, config.screen_height);

        for column in 0..config.screen_width {
            let hit = cast_ray(scene.map, scene.observer, config, column);
            self.compose_column(scene, fb, column, hit);
        }

        self.overlay_status(scene, fb);
        self.overlay_minimap(scene, fb);
    }

    /// Fill one screen column from a ray result.
    ///
    /// The wall's on-screen height is inversely proportional to its distance;
    /// the observer's eye sits at the vertical midline, so ceiling and floor
    /// boundaries mirror around it.
    fn compose_column(&self, scene: &Scene<'_>, fb: &mut FrameBuffer, column: u16, hit: RayHit) {
        let config = scene.config;
        let h = config.screen_height as f32;
        let ceiling = (h / 2.0 - h / hit.distance) as i32;
        let floor = config.screen_height as i32 - ceiling;

        for row in 0..config.screen_height {
            let y = row as i32;
            let glyph = if y < ceiling {
                ' '
            } else if y > ceiling && y <= floor {
                wall_glyph(hit, config.render_distance)
            } else {
                floor_glyph(row, config.screen_height)
            };
            fb.set(column, row, glyph);
        }
    }

    /// One-line readout of position, heading, and instantaneous frame rate.
    fn overlay_status(&self, scene: &Scene<'_>, fb: &mut FrameBuffer) {
        let observer = scene.observer;
        let fps = if scene.last_dt > 0.0 {
            1.0 / scene.last_dt
        } else {
            0.0
        };
        let status = format!(
            "X={:.2}, Y={:.2}, A={:.2} FPS={:.2} ",
            observer.x, observer.y, observer.angle, fps
        );
        fb.put_str(0, 0, &status);
    }

    /// Raw map glyphs in the top-left corner, one row below the status line,
    /// with the observer's truncated cell marked.
    fn overlay_minimap(&self, scene: &Scene<'_>, fb: &mut FrameBuffer) {
        let map = scene.map;
        for y in 0..map.height() {
            for x in 0..map.width() {
                fb.set(x as u16, y as u16 + 1, map.glyph(x as i32, y as i32));
            }
        }

        let observer = scene.observer;
        fb.set(observer.x as u16, observer.y as u16 + 1, 'P');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;
    use tui_raycast_core::DEFAULT_LEVEL;

    fn config() -> RenderConfig {
        RenderConfig {
            screen_width: 120,
            screen_height: 40,
            render_distance: 16.0,
            fov: PI / 4.0,
            ..RenderConfig::default()
        }
    }

    fn level() -> Map {
        Map::parse(DEFAULT_LEVEL).unwrap()
    }

    #[test]
    fn every_cell_is_written() {
        let map = level();
        let observer = Observer::new(8.0, 8.0, 0.0);
        let config = config();
        let scene = Scene {
            map: &map,
            observer: &observer,
            config: &config,
            last_dt: 0.016,
        };

        let mut fb = FrameBuffer::new(config.screen_width, config.screen_height);
        // Poison every cell; a complete pass must overwrite all of them.
        fb.fill('~');

        SceneView::new().render_into(&scene, &mut fb);
        assert!(
            fb.cells().iter().all(|&c| c != '~'),
            "composite pass left stale cells"
        );
    }

    fn bordered_arena() -> Map {
        let mut rows = vec!["#".repeat(16)];
        for _ in 0..14 {
            rows.push(format!("#{}#", " ".repeat(14)));
        }
        rows.push("#".repeat(16));
        Map::parse(&rows.join("\n")).unwrap()
    }

    #[test]
    fn column_is_sky_then_wall_then_floor() {
        let map = bordered_arena();
        // Mid-arena, looking at the far border wall.
        let observer = Observer::new(8.5, 8.0, 0.0);
        let config = config();
        let scene = Scene {
            map: &map,
            observer: &observer,
            config: &config,
            last_dt: 0.016,
        };

        let mut fb = FrameBuffer::new(1, 1);
        SceneView::new().render_into(&scene, &mut fb);

        // Pick a column clear of the minimap/status overlays.
        let column = 100;
        let top = fb.get(column, 1).unwrap();
        let middle = fb.get(column, config.screen_height / 2).unwrap();
        let bottom = fb.get(column, config.screen_height - 1).unwrap();

        assert_eq!(top, ' ');
        assert!(matches!(middle, '█' | '▓' | '▒' | '░'));
        assert_eq!(bottom, '#');
    }

    #[test]
    fn minimap_shows_the_level_and_the_observer() {
        let map = level();
        let observer = Observer::new(8.3, 9.7, 0.0);
        let config = config();
        let scene = Scene {
            map: &map,
            observer: &observer,
            config: &config,
            last_dt: 0.016,
        };

        let mut fb = FrameBuffer::new(config.screen_width, config.screen_height);
        SceneView::new().render_into(&scene, &mut fb);

        // Border wall of the level at minimap row 1.
        for x in 0..16 {
            assert_eq!(fb.get(x, 1), Some('#'));
        }
        // Observer marker at the truncated cell, shifted down past the
        // status row.
        assert_eq!(fb.get(8, 10), Some('P'));
    }

    #[test]
    fn status_line_reports_position_and_fps() {
        let map = level();
        let observer = Observer::new(8.0, 8.0, 0.0);
        let config = config();
        let scene = Scene {
            map: &map,
            observer: &observer,
            config: &config,
            last_dt: 0.02,
        };

        let mut fb = FrameBuffer::new(config.screen_width, config.screen_height);
        SceneView::new().render_into(&scene, &mut fb);

        let status: String = fb.row(0).iter().collect();
        assert!(status.starts_with("X=8.00, Y=8.00, A=0.00 FPS=50.00"));
    }

    #[test]
    fn zero_dt_reports_zero_fps() {
        let map = level();
        let observer = Observer::new(8.0, 8.0, 0.0);
        let config = config();
        let scene = Scene {
            map: &map,
            observer: &observer,
            config: &config,
            last_dt: 0.0,
        };

        let mut fb = FrameBuffer::new(config.screen_width, config.screen_height);
        SceneView::new().render_into(&scene, &mut fb);

        let status: String = fb.row(0).iter().collect();
        assert!(status.contains("FPS=0.00"));
    }
}
