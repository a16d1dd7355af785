//! Configuration management for termo
//!
//! Window, font and shell settings. Every field has a default, so a config
//! file only needs the keys it changes.

pub mod loader;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for termo
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window and text surface configuration
    pub ui: UiConfig,

    /// Shell interpreter configuration
    pub shell: ShellConfig,
}

impl Config {
    /// Check every section for values the application cannot work with
    pub fn validate(&self) -> Result<()> {
        self.ui.validate()?;
        self.shell.validate()
    }
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window title
    pub title: String,

    /// Application id reported to the window manager
    pub app_id: String,

    /// Initial window width in points
    pub window_width: f32,

    /// Initial window height in points
    pub window_height: f32,

    /// Start fullscreen
    pub fullscreen: bool,

    /// Font family name for the text surface
    pub font_family: String,

    /// Font file registered under `font_family`; the built-in monospace
    /// font is used when unset
    pub font_path: Option<PathBuf>,

    /// Font size in points
    pub font_size: f32,

    /// Caret color (RGB)
    pub caret_color: [u8; 3],

    /// Surface background color (RGB)
    pub background: [u8; 3],

    /// Text color (RGB)
    pub foreground: [u8; 3],
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "termo".to_string(),
            app_id: "termo".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            fullscreen: false,
            font_family: "JetBrains Mono".to_string(),
            font_path: None,
            font_size: 14.0,
            caret_color: [255, 0, 80],
            background: [24, 24, 27],
            foreground: [220, 220, 220],
        }
    }
}

impl UiConfig {
    fn validate(&self) -> Result<()> {
        if !(1.0..=200.0).contains(&self.font_size) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: format!("Font size must be within 1..=200, got {}", self.font_size),
            });
        }

        if self.window_width < 100.0 || self.window_height < 100.0 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.window_width/window_height".to_string(),
                reason: "Window must be at least 100x100".to_string(),
            });
        }

        if self.font_family.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_family".to_string(),
                reason: "Font family cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Where the child's standard error goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StderrMode {
    /// Inherited from termo, so it lands wherever termo's stderr goes
    #[default]
    Inherit,
    /// Captured and shown after stdout
    Merge,
    /// Dropped
    Discard,
}

/// Shell interpreter configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Environment variable naming the interpreter
    pub env_var: String,

    /// Interpreter used when `env_var` is unset; platform default when `None`
    pub fallback: Option<PathBuf>,

    /// Standard error handling for executed commands
    pub stderr: StderrMode,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            env_var: "SHELL".to_string(),
            fallback: None,
            stderr: StderrMode::Inherit,
        }
    }
}

impl ShellConfig {
    fn validate(&self) -> Result<()> {
        if self.env_var.trim().is_empty() || self.env_var.contains('=') {
            return Err(Error::ConfigValidationFailed {
                field: "shell.env_var".to_string(),
                reason: "Must be a valid environment variable name".to_string(),
            });
        }

        if let Some(fallback) = &self.fallback {
            if fallback.as_os_str().is_empty() {
                return Err(Error::ConfigValidationFailed {
                    field: "shell.fallback".to_string(),
                    reason: "Fallback shell path cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
