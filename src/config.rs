//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::models::{FontCatalog, LayoutMode, Palette, RgbColor};
use crate::models::configuration::DEFAULT_QUESTION_TEXT;

/// Preview preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Layout used when none is given on the command line
    #[serde(default)]
    pub layout: LayoutMode,
    /// Question text shown in the preview title
    #[serde(default = "default_question_text")]
    pub question_text: String,
}

fn default_question_text() -> String {
    DEFAULT_QUESTION_TEXT.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            question_text: default_question_text(),
        }
    }
}

/// Starting palette before any brand kit is generated.
///
/// White and Black are always pure and cannot be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Light neutral the Grey slot resolves to
    pub grey: RgbColor,
    /// First accent
    pub accent1: RgbColor,
    /// Second accent
    pub accent2: RgbColor,
    /// Third accent
    pub accent3: RgbColor,
}

impl PaletteConfig {
    /// Builds the palette these values describe.
    #[must_use]
    pub const fn to_palette(&self) -> Palette {
        Palette::new(self.grey, [self.accent1, self.accent2, self.accent3])
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        let palette = Palette::default();
        let [accent1, accent2, accent3] = palette.accents();
        Self {
            grey: palette.grey(),
            accent1,
            accent2,
            accent3,
        }
    }
}

/// Font catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FontConfig {
    /// JSON catalog replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/QuizStyle/config.toml`
/// - macOS: `~/Library/Application Support/QuizStyle/config.toml`
/// - Windows: `%APPDATA%\QuizStyle\config.toml`
///
/// `QUIZSTYLE_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - `fonts.catalog`, if set, must exist and hold display and body fonts
/// - `ui.question_text` must not be blank
/// - `palette.grey` must be a light color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Preview preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Starting palette
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Font catalog source
    #[serde(default)]
    pub fonts: FontConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `QUIZSTYLE_CONFIG_DIR` when set, otherwise the platform config dir.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.ui.question_text.trim().is_empty() {
            anyhow::bail!("Question text must not be empty");
        }

        if !self.palette.grey.is_light() {
            anyhow::bail!(
                "Grey neutral must be a light color: {}",
                self.palette.grey
            );
        }

        if let Some(catalog) = &self.fonts.catalog {
            if !catalog.exists() {
                anyhow::bail!("Font catalog does not exist: {}", catalog.display());
            }
            FontCatalog::load(catalog)?;
        }

        Ok(())
    }

    /// Loads the configured font catalog, or the built-in one.
    pub fn font_catalog(&self) -> Result<FontCatalog> {
        match &self.fonts.catalog {
            Some(path) => FontCatalog::load(path),
            None => FontCatalog::builtin(),
        }
    }

    /// Starting palette.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette.to_palette()
    }
}
