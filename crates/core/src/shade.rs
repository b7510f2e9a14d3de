//! Distance-banded glyph shading for walls and floor.
//!
//! Both functions are pure; the compositor calls them per cell.

use crate::raycast::RayHit;

/// Wall glyph for a ray hit.
///
/// Four discrete bands of decreasing density as distance grows, blank beyond
/// the render distance. Boundary hits are always blank, which draws the
/// mortar seams between adjacent wall cells.
pub fn wall_glyph(hit: RayHit, render_distance: f32) -> char {
    if hit.boundary {
        return ' ';
    }

    if hit.distance <= render_distance / 4.0 {
        '█'
    } else if hit.distance < render_distance / 3.0 {
        '▓'
    } else if hit.distance < render_distance / 2.0 {
        '▒'
    } else if hit.distance < render_distance {
        '░'
    } else {
        ' '
    }
}

/// Floor glyph for a screen row.
///
/// Rows are banded by their normalized offset below the horizon: the floor is
/// densest at the bottom of the screen and fades to blank at the midline.
pub fn floor_glyph(row: u16, screen_height: u16) -> char {
    let half = screen_height as f32 / 2.0;
    let fade = 1.0 - (row as f32 - half) / half;

    if fade < 0.25 {
        '#'
    } else if fade < 0.5 {
        'x'
    } else if fade < 0.75 {
        '.'
    } else if fade < 0.9 {
        '-'
    } else {
        ' '
    }
}
