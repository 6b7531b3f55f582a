use crate::config::FieldConfig;
use crate::engine::Star;
use crate::error::ConfigError;
use crate::integrator::{step, StepReport};
use crate::render::render;
use crate::surface::{FrameScheduler, Surface, SurfaceProvider};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, error, info};

/// Owns the star list and drives a rate-limited tick plus an every-frame
/// redraw against one surface
#[derive(Debug)]
pub struct StarField<S, R = StdRng> {
    surface: S,
    config: FieldConfig,
    stars: Vec<Star>,
    last_tick: Option<Duration>,
    rng: R,
}

impl<S: Surface, R: Rng> StarField<S, R> {
    /// Start an empty field on `surface` and request the first frame
    pub fn attach(
        surface: S,
        config: FieldConfig,
        rng: R,
        scheduler: &mut impl FrameScheduler,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let size = surface.size();
        info!(
            width = size.x,
            height = size.y,
            max_stars = config.max_stars,
            max_distance = config.max_distance,
            tick_interval_ms = config.tick_interval.as_millis() as u64,
            "starfield attached"
        );

        let field = Self {
            surface,
            config,
            stars: Vec::new(),
            last_tick: None,
            rng,
        };
        scheduler.request_frame();
        Ok(field)
    }

    /// Frame callback. `now` must come from a monotonic clock.
    ///
    /// Ticks when no tick has happened yet or at least `tick_interval` has
    /// elapsed since the last one, always redraws, then re-registers.
    /// Returns whether a tick ran.
    pub fn on_frame(&mut self, now: Duration, scheduler: &mut impl FrameScheduler) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.config.tick_interval,
        };

        if due {
            self.tick();
            self.last_tick = Some(now);
        }
        self.render();

        scheduler.request_frame();
        due
    }

    /// One simulation step using the surface's current size
    pub fn tick(&mut self) -> StepReport {
        let size = self.surface.size();
        let report = step(&mut self.stars, &self.config, size.x, size.y, &mut self.rng);
        debug!(
            advanced = report.advanced,
            culled = report.culled,
            spawned = report.spawned,
            live = self.stars.len(),
            "tick"
        );
        report
    }

    pub fn render(&mut self) {
        render(&self.stars, &mut self.surface);
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn last_tick(&self) -> Option<Duration> {
        self.last_tick
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Hosts push viewport resizes through here
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Stop the field: drops every star and hands the surface back.
    /// Consuming `self` means no further frames can be requested.
    pub fn detach(self) -> S {
        info!(live = self.stars.len(), "starfield detached");
        self.surface
    }
}

/// Host bootstrap: acquire a surface and attach a field to it.
///
/// A provider failure is logged and yields `None`; no field is built and no
/// frame is requested.
pub fn setup_starfield<P, R>(
    provider: &mut P,
    config: FieldConfig,
    rng: R,
    scheduler: &mut impl FrameScheduler,
) -> Option<StarField<P::Surface, R>>
where
    P: SurfaceProvider,
    R: Rng,
{
    let surface = match provider.acquire() {
        Ok(surface) => surface,
        Err(e) => {
            error!("failed to get surface context: {}", e);
            return None;
        }
    };

    match StarField::attach(surface, config, rng, scheduler) {
        Ok(field) => Some(field),
        Err(e) => {
            error!("invalid starfield configuration: {}", e);
            None
        }
    }
}
