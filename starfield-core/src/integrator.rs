use crate::config::FieldConfig;
use crate::engine::Star;
use crate::spawn::{spawn_count, spawn_star};
use rand::Rng;

/// What one simulation step did to the field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub advanced: usize,
    pub culled: usize,
    pub spawned: usize,
}

/// Advance every star by one unit of simulated time (explicit Euler: x += v),
/// drop stars that left the visible depth band, then top the field up with a
/// random number of fresh stars sized to the live surface dimensions
pub fn step<R: Rng + ?Sized>(
    stars: &mut Vec<Star>,
    config: &FieldConfig,
    width: f32,
    height: f32,
    rng: &mut R,
) -> StepReport {
    let advanced = stars.len();

    for star in stars.iter_mut() {
        star.location += star.velocity;
    }

    stars.retain(|star| star.is_visible(config.max_distance));
    let culled = advanced - stars.len();

    let spawned = spawn_count(rng, stars.len(), config.max_stars);
    stars.extend((0..spawned).map(|_| spawn_star(rng, width, height)));

    StepReport {
        advanced,
        culled,
        spawned,
    }
}
