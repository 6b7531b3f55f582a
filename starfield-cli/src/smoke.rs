//! Headless frame loop: a fixed-rate display clock driving a recording surface.

use rand::rngs::StdRng;
use starfield_core::{setup_starfield, FieldConfig, ManualScheduler, RecordingSurfaceProvider};
use std::time::Duration;
use tracing::info;

/// Counts from a finished smoke run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmokeSummary {
    pub frames: u64,
    pub ticks: u64,
    pub live: usize,
}

pub fn run(
    config: FieldConfig,
    rng: StdRng,
    seconds: f64,
    fps: f64,
    width: f32,
    height: f32,
) -> Result<SmokeSummary, Box<dyn std::error::Error>> {
    config.validate()?;
    if !fps.is_finite() || fps <= 0.0 {
        return Err(format!("fps must be a positive finite number, got {}", fps).into());
    }
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("seconds must be a non-negative finite number, got {}", seconds).into());
    }
    let frame_time = Duration::try_from_secs_f64(1.0 / fps)?;
    if frame_time.is_zero() {
        return Err(format!("fps {} is too high to advance the clock", fps).into());
    }
    let total = Duration::try_from_secs_f64(seconds)?;

    let mut provider = RecordingSurfaceProvider { width, height };
    let mut scheduler = ManualScheduler::new();
    let mut field = setup_starfield(&mut provider, config, rng, &mut scheduler)
        .ok_or("no drawing surface available")?;

    println!(
        "Starfield smoke run: {:.1}s @ {:.1}fps (max_stars={})",
        seconds, fps, config.max_stars
    );

    let mut now = Duration::ZERO;
    let mut frames = 0u64;
    let mut ticks = 0u64;
    let mut next_report = Duration::from_millis(500);

    while now < total && scheduler.take_request() {
        if field.on_frame(now, &mut scheduler) {
            ticks += 1;
        }
        frames += 1;

        let drawn = field.surface().circles_in_last_frame();
        // Only the latest frame matters for reporting
        field.surface_mut().take_commands();

        if now >= next_report {
            println!(
                "t={:.2}s live={} drawn={}",
                now.as_secs_f64(),
                field.stars().len(),
                drawn
            );
            next_report += Duration::from_millis(500);
        }
        now += frame_time;
    }

    let live = field.stars().len();
    field.detach();
    info!(frames, ticks, live, "smoke run finished");
    println!("Done. frames={} ticks={} live={}", frames, ticks, live);

    Ok(SmokeSummary {
        frames,
        ticks,
        live,
    })
}
