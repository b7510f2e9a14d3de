//! Fixed-step ray marching against the map grid.

use arrayvec::ArrayVec;

use tui_raycast_types::{RenderConfig, BOUNDARY_RAD, RAY_STEP};

use crate::map::{Map, Tile};
use crate::observer::Observer;

/// Result of marching one ray: how far the first wall is, and whether the hit
/// grazes a cell corner closely enough to render as a seam.
///
/// Produced fresh per column per frame; nothing persists across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub boundary: bool,
}

impl RayHit {
    /// The escape result: the ray reached the render distance, or left the
    /// map, without meeting a wall.
    fn escaped(config: &RenderConfig) -> Self {
        Self {
            distance: config.render_distance,
            boundary: false,
        }
    }
}

/// World-space angle of the ray for a given screen column.
///
/// Column 0 is the left edge of the field of view, the last column the right
/// edge; the observer's heading bisects them.
pub fn ray_angle(observer: &Observer, config: &RenderConfig, column: u16) -> f32 {
    observer.angle - config.fov / 2.0
        + (column as f32 / config.screen_width as f32) * config.fov
}

/// March the ray for `column` from the observer until it hits a wall or
/// escapes.
///
/// The march advances in fixed [`RAY_STEP`] increments along the unit vector
/// `(sin a, cos a)` and tests the truncated grid cell at each stop. Leaving
/// the map, or exceeding the render distance, terminates the march with the
/// render distance and no boundary; this is a defined outcome, not an error.
pub fn cast_ray(map: &Map, observer: &Observer, config: &RenderConfig, column: u16) -> RayHit {
    let angle = ray_angle(observer, config, column);
    let eye_x = angle.sin();
    let eye_y = angle.cos();

    let mut distance = 0.0_f32;
    loop {
        distance += RAY_STEP;
        if distance > config.render_distance {
            return RayHit::escaped(config);
        }

        let test_x = (observer.x + eye_x * distance) as i32;
        let test_y = (observer.y + eye_y * distance) as i32;

        match map.tile(test_x, test_y) {
            None => return RayHit::escaped(config),
            Some(Tile::Open) => {}
            Some(Tile::Wall) => {
                return RayHit {
                    distance,
                    boundary: grazes_corner(observer, eye_x, eye_y, test_x, test_y),
                }
            }
        }
    }
}

/// Corner test for wall-edge seams.
///
/// For each of the hit cell's four integer corners, compute the distance from
/// the observer and the cosine between the ray and the direction to that
/// corner. If the ray passes within [`BOUNDARY_RAD`] of either of the two
/// nearest corners, the hit is a boundary.
fn grazes_corner(observer: &Observer, eye_x: f32, eye_y: f32, cell_x: i32, cell_y: i32) -> bool {
    let mut corners: ArrayVec<(f32, f32), 4> = ArrayVec::new();

    for dx in 0..2 {
        for dy in 0..2 {
            let vx = (cell_x + dx) as f32 - observer.x;
            let vy = (cell_y + dy) as f32 - observer.y;
            let d = (vx * vx + vy * vy).sqrt();
            let dot = (eye_x * vx + eye_y * vy) / d;
            corners.push((d, dot));
        }
    }

    corners.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

    corners
        .iter()
        .take(2)
        .any(|&(_, dot)| dot.clamp(-1.0, 1.0).acos() < BOUNDARY_RAD)
}
