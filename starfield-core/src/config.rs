use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_MAX_DISTANCE: f32 = 575.0;
pub const DEFAULT_MAX_STARS: usize = 7000;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(25);

/// Constants a controller runs with. Fixed once the controller is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Stars at or beyond `-max_distance` are culled
    pub max_distance: f32,
    pub max_stars: usize,
    /// Minimum time between two simulation steps; raise it for slower ticks
    pub tick_interval: Duration,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_stars: DEFAULT_MAX_STARS,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(ConfigError::MaxDistance(self.max_distance));
        }
        if self.max_stars == 0 {
            return Err(ConfigError::MaxStars);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::TickInterval);
        }
        Ok(())
    }
}
