//! Drawing surface and frame scheduling seams.
//!
//! The core never talks to a window system directly. A host hands the
//! controller something that implements [`Surface`] and drives it through a
//! [`FrameScheduler`]. [`RecordingSurface`] and [`ManualScheduler`] are the
//! headless implementations used by the CLI smoke run and by tests.

use crate::engine::Rgb;
use crate::error::SurfaceError;
use glam::Vec2;

/// A 2D drawing context with a live logical size
pub trait Surface {
    /// Current logical width and height. Read on every spawn and projection.
    fn size(&self) -> Vec2;

    /// Paint the whole area with one opaque color
    fn fill(&mut self, color: Rgb);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
}

/// Hands out a drawing surface once at startup
pub trait SurfaceProvider {
    type Surface: Surface;

    fn acquire(&mut self) -> Result<Self::Surface, SurfaceError>;
}

/// Clock/scheduler: asks for one more frame callback before the next repaint
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Fill(Rgb),
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
}

/// Headless surface that records every draw call
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Resize subscription point for hosts
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of circles drawn since the last fill
    pub fn circles_in_last_frame(&self) -> usize {
        self.commands
            .iter()
            .rev()
            .take_while(|c| !matches!(c, DrawCommand::Fill(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

/// Provides a [`RecordingSurface`] of a fixed starting size
#[derive(Debug, Clone, Copy)]
pub struct RecordingSurfaceProvider {
    pub width: f32,
    pub height: f32,
}

impl SurfaceProvider for RecordingSurfaceProvider {
    type Surface = RecordingSurface;

    fn acquire(&mut self) -> Result<RecordingSurface, SurfaceError> {
        let (width, height) = (self.width, self.height);
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        Ok(RecordingSurface::new(width, height))
    }
}

/// Scheduler that only counts requests; the caller decides when frames happen
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualScheduler {
    pending: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame has been requested and not yet consumed
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// Consume one outstanding request, returning whether there was one
    pub fn take_request(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending += 1;
    }
}
