//! Determinism tests - the same seed and frame timestamps produce identical fields

use starfield_core::tests::test_helpers::seeded_field;
use starfield_core::{DrawCommand, FieldConfig};
use std::time::Duration;

fn run_frames(seed: u64, frames: u64) -> Vec<DrawCommand> {
    let (mut field, mut scheduler) = seeded_field(FieldConfig::default(), seed);
    for i in 0..frames {
        // 60 Hz display, so roughly every other frame ticks
        field.on_frame(Duration::from_micros(i * 16_667), &mut scheduler);
    }
    field.surface_mut().take_commands()
}

#[test]
fn test_same_seed_same_frames() {
    let first = run_frames(1234, 120);
    let second = run_frames(1234, 120);

    assert_eq!(first, second, "Running the same seed twice should draw identically");
}

#[test]
fn test_multiple_runs_determinism() {
    let runs: Vec<_> = (0..4).map(|_| run_frames(99, 60)).collect();

    for i in 1..runs.len() {
        assert_eq!(runs[0], runs[i], "Run {} should match run 0", i);
    }
}

#[test]
fn test_different_seeds_diverge() {
    assert_ne!(run_frames(1, 30), run_frames(2, 30));
}
