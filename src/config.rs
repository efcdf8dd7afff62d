//! Tab strip configuration: dimensions, colours, visibility mode.
//!
//! All fields carry serde defaults so a partial TOML file (or no file at all)
//! yields a usable configuration. Hosts load and save by explicit path; this
//! crate never decides where the file lives.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or saving tab strip configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading tab strip config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained TOML that could not be parsed.
    #[error("TOML parse error in tab strip config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized back to TOML.
    #[error("TOML serialize error in tab strip config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Tab bar visibility mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TabBarMode {
    /// Always show the tab bar (default for a browser window)
    #[default]
    Always,
    /// Show the tab bar only when there are multiple tabs
    WhenMultiple,
    /// Never show the tab bar
    Never,
}

/// Configuration for the tab strip
///
/// Colour fields are plain RGB triples; opacity effects (dragged tab,
/// divider fade) are applied at the painting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarConfig {
    // ========================================================================
    // Visibility & geometry
    // ========================================================================
    /// When the tab bar is shown at all
    #[serde(default)]
    pub tab_bar_mode: TabBarMode,

    /// Height of a single tab
    #[serde(default = "default_tab_height")]
    pub tab_height: f32,

    /// Minimum tab width; also the quantum used by drag-to-reorder
    #[serde(default = "default_tab_min_width")]
    pub tab_min_width: f32,

    /// Maximum tab width regardless of title length
    #[serde(default = "default_tab_max_width")]
    pub tab_max_width: f32,

    /// Gap between adjacent items in the strip
    #[serde(default = "default_tab_spacing")]
    pub tab_spacing: f32,

    /// Corner radius of the tab body
    #[serde(default = "default_tab_corner_radius")]
    pub tab_corner_radius: f32,

    /// Edge length of the close button hit box
    #[serde(default = "default_close_button_size")]
    pub close_button_size: f32,

    // ========================================================================
    // Colours
    // ========================================================================
    /// Background of the bar behind the tabs
    #[serde(default = "default_bar_background")]
    pub bar_background: [u8; 3],

    /// Background of the active tab
    #[serde(default = "default_active_background")]
    pub tab_active_background: [u8; 3],

    /// Background of an inactive tab
    #[serde(default = "default_inactive_background")]
    pub tab_inactive_background: [u8; 3],

    /// Background of a hovered (non-active) tab
    #[serde(default = "default_hover_background")]
    pub tab_hover_background: [u8; 3],

    /// Border of the active tab
    #[serde(default = "default_active_border")]
    pub tab_active_border: [u8; 3],

    /// Border of an inactive tab
    #[serde(default = "default_inactive_border")]
    pub tab_inactive_border: [u8; 3],

    /// Border of a hovered (non-active) tab
    #[serde(default = "default_hover_border")]
    pub tab_hover_border: [u8; 3],

    /// Title text of the active tab
    #[serde(default = "default_active_text")]
    pub tab_active_text: [u8; 3],

    /// Title text of inactive and hovered tabs
    #[serde(default = "default_inactive_text")]
    pub tab_inactive_text: [u8; 3],

    /// Close button glyph at rest
    #[serde(default = "default_close_button_color")]
    pub close_button_color: [u8; 3],

    /// Close button glyph while hovered
    #[serde(default = "default_close_button_hover_color")]
    pub close_button_hover_color: [u8; 3],
}

fn default_tab_height() -> f32 {
    32.0
}
fn default_tab_min_width() -> f32 {
    120.0
}
fn default_tab_max_width() -> f32 {
    260.0
}
fn default_tab_spacing() -> f32 {
    2.0
}
fn default_tab_corner_radius() -> f32 {
    8.0
}
fn default_close_button_size() -> f32 {
    16.0
}
fn default_bar_background() -> [u8; 3] {
    [233, 236, 239]
}
fn default_active_background() -> [u8; 3] {
    [245, 246, 247]
}
fn default_inactive_background() -> [u8; 3] {
    [208, 212, 217]
}
fn default_hover_background() -> [u8; 3] {
    [228, 231, 235]
}
fn default_active_border() -> [u8; 3] {
    [180, 184, 189]
}
fn default_inactive_border() -> [u8; 3] {
    [196, 200, 205]
}
fn default_hover_border() -> [u8; 3] {
    [188, 192, 197]
}
fn default_active_text() -> [u8; 3] {
    [40, 42, 46]
}
fn default_inactive_text() -> [u8; 3] {
    [96, 100, 106]
}
fn default_close_button_color() -> [u8; 3] {
    [150, 153, 158]
}
fn default_close_button_hover_color() -> [u8; 3] {
    [40, 42, 46]
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            tab_bar_mode: TabBarMode::Always,
            tab_height: default_tab_height(),
            tab_min_width: default_tab_min_width(),
            tab_max_width: default_tab_max_width(),
            tab_spacing: default_tab_spacing(),
            tab_corner_radius: default_tab_corner_radius(),
            close_button_size: default_close_button_size(),
            bar_background: default_bar_background(),
            tab_active_background: default_active_background(),
            tab_inactive_background: default_inactive_background(),
            tab_hover_background: default_hover_background(),
            tab_active_border: default_active_border(),
            tab_inactive_border: default_inactive_border(),
            tab_hover_border: default_hover_border(),
            tab_active_text: default_active_text(),
            tab_inactive_text: default_inactive_text(),
            close_button_color: default_close_button_color(),
            close_button_hover_color: default_close_button_hover_color(),
        }
    }
}

impl TabBarConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing fields take their defaults; a missing file is an `Io` error
    /// the host may treat as "use `Default`".
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration as pretty-printed TOML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
