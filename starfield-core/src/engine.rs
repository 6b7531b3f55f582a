use glam::Vec3;

/// A point in view space. `z` is depth: more negative is farther from the viewer.
pub type Coordinates = Vec3;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single point of light in the field
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub size: f32,
    pub location: Coordinates,
    pub velocity: Coordinates, // only z is nonzero for spawned stars
    pub color: Rgb,
}

impl Star {
    pub fn new(size: f32, location: Coordinates, velocity: Coordinates, color: Rgb) -> Self {
        Self {
            size,
            location,
            velocity,
            color,
        }
    }

    /// Depth along the viewing axis
    #[inline]
    pub fn depth(&self) -> f32 {
        self.location.z
    }

    /// Whether the star sits between the near plane (`z < 1`) and the far
    /// boundary (`z > -max_distance`), both exclusive
    #[inline]
    pub fn is_visible(&self, max_distance: f32) -> bool {
        let z = self.depth();
        z < 1.0 && z > -max_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star_at_depth(z: f32) -> Star {
        Star::new(3.0, Vec3::new(0.0, 0.0, z), Vec3::ZERO, Rgb::new(200, 200, 200))
    }

    #[test]
    fn near_plane_is_exclusive() {
        assert!(star_at_depth(0.999).is_visible(575.0));
        assert!(!star_at_depth(1.0).is_visible(575.0));
    }

    #[test]
    fn far_boundary_is_exclusive() {
        assert!(!star_at_depth(-575.0).is_visible(575.0));
        assert!(star_at_depth(-575.0 + 0.0001).is_visible(575.0));
    }
}
