//! Windowed starfield.
//!
//! eframe owns the event loop; every `update` is one frame callback whose
//! timestamp is egui's input clock.

use crate::canvas::{EguiCanvas, EguiCanvasProvider, RepaintScheduler};
use eframe::egui;
use rand::rngs::StdRng;
use starfield_core::{setup_starfield, FieldConfig, StarField};
use std::time::Duration;

pub struct StarfieldApp {
    field: Option<StarField<EguiCanvas, StdRng>>,
}

impl StarfieldApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: FieldConfig, rng: StdRng) -> Self {
        let mut provider = EguiCanvasProvider { cc };
        let mut scheduler = RepaintScheduler(&cc.egui_ctx);
        // On failure the window stays up with a blank panel and no loop runs
        let field = setup_starfield(&mut provider, config, rng, &mut scheduler);
        Self { field }
    }
}

impl eframe::App for StarfieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let Some(field) = self.field.as_mut() else {
                    return;
                };

                field.surface_mut().set_rect(ui.max_rect());
                field.on_frame(now, &mut RepaintScheduler(ctx));
                ui.painter().extend(field.surface_mut().take_shapes());
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(field) = self.field.take() {
            field.detach();
        }
    }
}

pub fn run(config: FieldConfig, rng: StdRng) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Starfield")
            .with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Starfield",
        options,
        Box::new(move |cc| Ok(Box::new(StarfieldApp::new(cc, config, rng)))),
    )?;

    Ok(())
}
