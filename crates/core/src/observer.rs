//! Observer state and the per-tick simulation step.

use tui_raycast_types::{InputState, MOVE_SPEED, ROTATE_SPEED};

use crate::map::Map;

/// First-person camera: continuous position inside the map plus a heading.
///
/// Mutated only by [`Observer::update`], which runs at most once per consumed
/// frame-gate signal; everything else reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub x: f32,
    pub y: f32,
    /// Heading in radians. The forward direction is `(sin angle, cos angle)`.
    pub angle: f32,
}

impl Observer {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// Apply one simulation step: rotation, translation, then collision.
    ///
    /// If the move lands the truncated grid cell on a wall, both axes are
    /// rolled back together to the exact pre-step position. A single wall
    /// cell therefore blocks the whole move even when only one axis crossed
    /// into it, so there is no sliding along walls. Known limitation, kept.
    pub fn update(&mut self, input: &InputState, dt: f32, map: &Map) {
        let (last_x, last_y) = (self.x, self.y);

        if input.rotate_left {
            self.angle -= ROTATE_SPEED * dt;
        }
        if input.rotate_right {
            self.angle += ROTATE_SPEED * dt;
        }
        if input.forward {
            self.x += self.angle.sin() * MOVE_SPEED * dt;
            self.y += self.angle.cos() * MOVE_SPEED * dt;
        }
        if input.backward {
            self.x -= self.angle.sin() * MOVE_SPEED * dt;
            self.y -= self.angle.cos() * MOVE_SPEED * dt;
        }

        if map.is_wall(self.x as i32, self.y as i32) {
            self.x = last_x;
            self.y = last_y;
        }
    }
}
