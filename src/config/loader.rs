//! Configuration File Loading
//!
//! Finds and loads configuration files from the usual locations, falling
//! back to built-in defaults.

use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files, without extension
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Pick a format from a file extension; anything unknown is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn name(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self::with_search_paths(Self::get_search_paths())
    }

    /// Create a loader that only looks in `search_paths`
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration from the default locations
    pub fn load() -> Result<Config> {
        Self::new().load_first()
    }

    /// Load the first valid configuration on the search path, or defaults
    pub fn load_first(&mut self) -> Result<Config> {
        if let Some((path, config)) = self.find_and_load_config() {
            config.validate()?;
            info!("Configuration loaded from {}", path.display());
            self.current_path = Some(path);
            return Ok(config);
        }

        debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Load and validate a specific configuration file
    pub fn load_from_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "Configuration file does not exist".to_string(),
            });
        }

        let config = Self::load_config_file(path, ConfigFormat::from_path(path))?;
        config.validate()?;
        Ok(config)
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Option<(PathBuf, Config)> {
        for path in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = path.with_extension(format.extension());

                if config_path.exists() {
                    match Self::load_config_file(&config_path, *format) {
                        Ok(config) => return Some((config_path, config)),
                        Err(e) => {
                            // Log warning but continue searching
                            warn!(
                                "Failed to load config from {}: {}",
                                config_path.display(),
                                e
                            );
                        }
                    }
                }
            }
        }

        None
    }

    /// Load a specific configuration file
    fn load_config_file(path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let parsed = match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| Error::ConfigParseFailed {
            format: format.name().to_string(),
            reason,
        })
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("termo").join("config"));
        }

        // XDG config home fallback (for platforms where dirs ignores it)
        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            let xdg_path = PathBuf::from(xdg_config).join("termo").join("config");
            if !paths.contains(&xdg_path) {
                paths.push(xdg_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".termo").join("config"));
        }

        paths
    }

    /// Path of the file the configuration was loaded from
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Configured search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
