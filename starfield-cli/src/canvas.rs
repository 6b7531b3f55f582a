//! egui-backed drawing surface.
//!
//! Draw calls are collected as [`egui::Shape`]s in surface coordinates offset
//! by the panel rect, then handed to the panel's painter once per frame.

use egui::{Color32, Pos2, Rect, Shape};
use glam::Vec2;
use starfield_core::{FrameScheduler, Rgb, Surface, SurfaceError, SurfaceProvider};

pub struct EguiCanvas {
    rect: Rect,
    shapes: Vec<Shape>,
}

impl EguiCanvas {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            shapes: Vec::new(),
        }
    }

    /// Called by the host whenever the panel it paints into moves or resizes
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn take_shapes(&mut self) -> Vec<Shape> {
        std::mem::take(&mut self.shapes)
    }

    fn to_screen(&self, p: Vec2) -> Pos2 {
        self.rect.min + egui::vec2(p.x, p.y)
    }
}

fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

impl Surface for EguiCanvas {
    fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn fill(&mut self, c: Rgb) {
        self.shapes.push(Shape::rect_filled(self.rect, 0.0, color(c)));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, c: Rgb) {
        let center = self.to_screen(center);
        self.shapes.push(Shape::circle_filled(center, radius, color(c)));
    }
}

/// Hands out a canvas only when eframe came up with a GL context
pub struct EguiCanvasProvider<'a, 'c> {
    pub cc: &'a eframe::CreationContext<'c>,
}

impl SurfaceProvider for EguiCanvasProvider<'_, '_> {
    type Surface = EguiCanvas;

    fn acquire(&mut self) -> Result<EguiCanvas, SurfaceError> {
        if self.cc.gl.is_none() {
            return Err(SurfaceError::ContextUnavailable(
                "eframe did not provide an OpenGL context".to_string(),
            ));
        }
        Ok(EguiCanvas::new(self.cc.egui_ctx.screen_rect()))
    }
}

/// egui's repaint request is the frame scheduler
pub struct RepaintScheduler<'a>(pub &'a egui::Context);

impl FrameScheduler for RepaintScheduler<'_> {
    fn request_frame(&mut self) {
        self.0.request_repaint();
    }
}
