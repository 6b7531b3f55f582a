//! Random star creation.
//!
//! New stars appear on the near plane (`z == 0`) anywhere inside the
//! surface's centered rectangle and recede into depth at a random speed.

use crate::engine::{Coordinates, Rgb, Star};
use rand::Rng;
use std::ops::{Range, RangeInclusive};

pub const SIZE_RANGE: Range<f32> = 2.0..5.0;
pub const COLOR_RANGE: RangeInclusive<u8> = 100..=255;
/// Lower bound (exclusive) and upper bound (inclusive) of the recession speed along z
pub const MIN_DEPTH_SPEED: f32 = -5.5;
pub const MAX_DEPTH_SPEED: f32 = -0.5;

/// Create one star for a surface of the given logical size
pub fn spawn_star<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Star {
    let size = rng.gen_range(SIZE_RANGE);
    let location = Coordinates::new(
        (rng.gen::<f32>() - 0.5) * width,
        (rng.gen::<f32>() - 0.5) * height,
        0.0,
    );
    // u in [0, 1) maps to z in (-5.5, -0.5]
    let speed = MAX_DEPTH_SPEED - rng.gen::<f32>() * (MAX_DEPTH_SPEED - MIN_DEPTH_SPEED);
    let velocity = Coordinates::new(0.0, 0.0, speed);

    Star::new(size, location, velocity, random_color(rng))
}

/// A color bright enough to stand out against black
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.gen_range(COLOR_RANGE),
        rng.gen_range(COLOR_RANGE),
        rng.gen_range(COLOR_RANGE),
    )
}

/// How many stars to add this tick: uniform in `[0, max - current)`, or 0 when full
pub fn spawn_count<R: Rng + ?Sized>(rng: &mut R, current: usize, max: usize) -> usize {
    if current >= max {
        return 0;
    }
    rng.gen_range(0..max - current)
}
