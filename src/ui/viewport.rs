//! Surface viewport component
//!
//! Draws the read-only text surface filling the window, scrolled to the
//! end.

use super::text::FontConfig;
use crate::config::UiConfig;
use crate::terminal::{DisplaySink, TextSurface};
use eframe::egui;

/// Surface viewport component
pub struct SurfaceViewport {
    /// Viewport configuration
    config: ViewportConfig,
    /// Font and colors for the text
    fonts: FontConfig,
}

#[derive(Debug, Clone)]
pub struct ViewportConfig {
    /// Background color
    pub background_color: egui::Color32,
    /// Padding around content
    pub padding: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::from_ui_config(&UiConfig::default())
    }
}

impl ViewportConfig {
    pub fn from_ui_config(config: &UiConfig) -> Self {
        let [r, g, b] = config.background;
        Self {
            background_color: egui::Color32::from_rgb(r, g, b),
            padding: 8.0,
        }
    }
}

impl SurfaceViewport {
    /// Create a viewport styled from UI configuration
    pub fn new(config: &UiConfig) -> Self {
        Self {
            config: ViewportConfig::from_ui_config(config),
            fonts: FontConfig::from_ui_config(config),
        }
    }

    /// Draw `surface` as a central panel filling `ui`
    pub fn show(&self, ui: &mut egui::Ui, surface: &TextSurface) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.config.background_color)
                    .inner_margin(self.config.padding),
            )
            .show_inside(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(self.fonts.layout(surface.content()))
                                .wrap()
                                .selectable(false),
                        );
                    });
            });
    }

    /// Get configuration
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn fonts(&self) -> &FontConfig {
        &self.fonts
    }
}

impl Default for SurfaceViewport {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}
