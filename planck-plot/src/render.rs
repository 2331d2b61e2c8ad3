use std::sync::Arc;

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use planck::Spectrum;
use thiserror::Error;

const PIXELS_PER_INCH: f32 = 100.0;
const FALLBACK_FONT_NAME: &str = "dejavu-sans";
// egui's bundled fonts lack superscript minus (U+207B) used by the unit label
const FALLBACK_FONT_BYTES: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to open plot window: {0}")]
    Window(#[from] eframe::Error),
}

/// Plot cosmetics.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Width and height in inches
    pub size: (f32, f32),
    pub color: Color32,
    pub grid: bool,
    pub legend: bool,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            title: "Black Body Radiation Spectrum".to_string(),
            x_label: "Wavelength (nm)".to_string(),
            y_label: "Spectral Radiance (W·sr⁻¹·m⁻³)".to_string(),
            size: (10.0, 6.0),
            color: Color32::from_rgb(255, 165, 0),
            grid: true,
            legend: true,
        }
    }
}

impl Figure {
    pub fn window_size(&self) -> egui::Vec2 {
        egui::vec2(self.size.0, self.size.1) * PIXELS_PER_INCH
    }
}

fn configure_fonts(context: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        FALLBACK_FONT_NAME.to_string(),
        Arc::new(egui::FontData::from_static(FALLBACK_FONT_BYTES)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(FALLBACK_FONT_NAME.to_string());
    context.set_fonts(fonts);
}

struct PlotApp {
    figure: Figure,
    label: String,
    points: Vec<[f64; 2]>,
}

impl PlotApp {
    fn new(figure: Figure, spectrum: &Spectrum) -> Self {
        Self {
            figure,
            label: spectrum.label(),
            points: spectrum.points_nm(),
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.figure.title);
            });

            let line = Line::new(self.label.as_str(), PlotPoints::from(self.points.clone()))
                .color(self.figure.color);

            let mut plot = Plot::new("spectrum")
                .x_axis_label(self.figure.x_label.as_str())
                .y_axis_label(self.figure.y_label.as_str())
                .show_grid(self.figure.grid);
            if self.figure.legend {
                plot = plot.legend(Legend::default());
            }

            plot.show(ui, |plot_ui| {
                plot_ui.line(line);
            });
        });
    }
}

/// Opens a window with the spectrum and blocks until it is closed.
pub fn show(figure: Figure, spectrum: &Spectrum) -> Result<(), RenderError> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(figure.title.as_str())
            .with_inner_size(figure.window_size()),
        ..Default::default()
    };

    let title = figure.title.clone();
    let app = PlotApp::new(figure, spectrum);

    log::info!("Showing {} samples", app.points.len());
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
