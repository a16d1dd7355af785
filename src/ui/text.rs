//! Surface text layout and fonts
//!
//! Lays out the surface content in the configured monospace font followed
//! by a caret block, and registers a custom font file when one is
//! configured.

use crate::config::UiConfig;
use crate::error::{Error, Result};
use eframe::egui;
use std::sync::Arc;

/// Glyph drawn after the last character
pub const CARET: &str = "\u{258C}";

/// Font and colors used to draw the surface
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Font family and size
    pub font: egui::FontId,
    /// Text color
    pub foreground: egui::Color32,
    /// Caret color
    pub caret: egui::Color32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::from_ui_config(&UiConfig::default())
    }
}

impl FontConfig {
    pub fn from_ui_config(config: &UiConfig) -> Self {
        let [r, g, b] = config.foreground;
        let [cr, cg, cb] = config.caret_color;
        Self {
            font: egui::FontId::monospace(config.font_size),
            foreground: egui::Color32::from_rgb(r, g, b),
            caret: egui::Color32::from_rgb(cr, cg, cb),
        }
    }

    /// Lay out `content` with a trailing caret
    pub fn layout(&self, content: &str) -> egui::text::LayoutJob {
        let mut job = egui::text::LayoutJob::default();
        job.append(
            content,
            0.0,
            egui::TextFormat::simple(self.font.clone(), self.foreground),
        );
        job.append(
            CARET,
            0.0,
            egui::TextFormat::simple(self.font.clone(), self.caret),
        );
        job
    }
}

/// Register `config.font_path` as the preferred monospace font.
///
/// Does nothing when no font file is configured.
pub fn install_fonts(ctx: &egui::Context, config: &UiConfig) -> Result<()> {
    let Some(path) = &config.font_path else {
        debug!(
            "No font file configured for '{}', using built-in monospace",
            config.font_family
        );
        return Ok(());
    };

    let bytes = std::fs::read(path).map_err(|e| Error::FontLoadFailed {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        config.font_family.clone(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, config.font_family.clone());
    ctx.set_fonts(fonts);

    info!("Loaded font '{}' from {}", config.font_family, path.display());
    Ok(())
}
