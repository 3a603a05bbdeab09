// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file, and centralizes the
//! timing constants used by the carousel widgets.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Auto-advance interval for the hero slideshow.
pub const HERO_INTERVAL: Duration = Duration::from_millis(5000);

/// Settle delay for hero slide transitions (covers the cross-fade).
pub const HERO_SETTLE: Duration = Duration::from_millis(500);

/// Auto-advance interval for the testimonial carousel.
pub const TESTIMONIAL_INTERVAL: Duration = Duration::from_millis(7000);

/// Settle delay for testimonial card transitions.
pub const TESTIMONIAL_SETTLE: Duration = Duration::from_millis(100);

/// Grace delay before testimonial auto-advance resumes after a swipe.
pub const TESTIMONIAL_RESUME_GRACE: Duration = Duration::from_millis(500);

/// Minimum horizontal displacement (logical pixels) for a swipe to navigate.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Granularity of the timer subscription driving the cyclers.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Number of columns in the portfolio grid.
pub const GALLERY_COLUMNS: usize = 3;

/// Upper bound on hero slides when falling back to one image per category.
pub const MAX_HERO_SLIDES: usize = 5;

/// Light/dark theme preference persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The opposite mode, for the menu's theme toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Portfolio directory remembered from the last session.
    pub portfolio_dir: Option<PathBuf>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Whether the hero and testimonial carousels advance on their own.
    #[serde(default)]
    pub auto_advance: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portfolio_dir: None,
            theme_mode: ThemeMode::default(),
            auto_advance: Some(true),
        }
    }
}

impl Config {
    /// Resolved auto-advance preference.
    #[must_use]
    pub fn auto_advance_enabled(&self) -> bool {
        self.auto_advance.unwrap_or(true)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
