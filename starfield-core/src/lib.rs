pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod render;
pub mod spawn;
pub mod surface;

pub use config::FieldConfig;
pub use controller::{setup_starfield, StarField};
pub use engine::{Coordinates, Rgb, Star};
pub use error::{ConfigError, SurfaceError};
pub use integrator::{step, StepReport};
pub use render::{project, render, ProjectedStar};
pub use surface::{
    DrawCommand, FrameScheduler, ManualScheduler, RecordingSurface, RecordingSurfaceProvider,
    Surface, SurfaceProvider,
};
