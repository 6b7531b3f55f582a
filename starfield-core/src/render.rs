//! Perspective projection and the per-frame redraw.

use crate::engine::{Rgb, Star};
use crate::surface::Surface;
use glam::Vec2;

/// Scale applied to `size / depth` to get an on-screen radius
pub const RADIUS_SCALE: f32 = 100.0;

/// A star mapped onto the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

/// Perspective-divide a star onto a surface of `size`.
///
/// Returns `None` for stars at or in front of the eye point (`z >= 0`). Fresh
/// stars sit exactly on `z == 0` until their first tick, where the divide has
/// no finite answer, so they are skipped for that frame.
pub fn project(star: &Star, size: Vec2) -> Option<ProjectedStar> {
    let z = star.location.z;
    if z >= 0.0 {
        return None;
    }

    let half = size / 2.0;
    let center = Vec2::new(star.location.x, star.location.y) / z * size + half;
    let radius = (star.size / -z) * RADIUS_SCALE;

    if !center.is_finite() || !radius.is_finite() {
        return None;
    }

    Some(ProjectedStar {
        center,
        radius,
        color: star.color,
    })
}

/// Erase the surface to black and draw every projectable star
pub fn render<S: Surface + ?Sized>(stars: &[Star], surface: &mut S) {
    surface.fill(Rgb::BLACK);

    let size = surface.size();
    for projected in stars.iter().filter_map(|star| project(star, size)) {
        surface.fill_circle(projected.center, projected.radius, projected.color);
    }
}
