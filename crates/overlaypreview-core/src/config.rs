//! Typed configuration for the preview widget.

use crate::geometry::PixelSize;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Colors used when painting the preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill behind everything.
    pub background: Rgba,
    /// Display area fill.
    pub display_fill: Rgba,
    /// Display area outline.
    pub display_border: Rgba,
    /// Overlay outline.
    pub overlay_stroke: Rgba,
    /// Overlay fill; its alpha is replaced by one of the tiers below.
    pub overlay_fill: Rgba,
    /// Overlay alpha when idle.
    pub resting_alpha: u8,
    /// Overlay alpha when the pointer hovers the movable body.
    pub hover_alpha: u8,
    /// Overlay alpha while a drag is active.
    pub drag_alpha: u8,
    /// Resize handle fill.
    pub handle: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(192, 192, 192),
            display_fill: Rgba::rgb(255, 255, 255),
            display_border: Rgba::rgb(128, 128, 128),
            overlay_stroke: Rgba::rgb(0, 0, 255),
            overlay_fill: Rgba::rgb(0, 0, 255),
            resting_alpha: 100,
            hover_alpha: 120,
            drag_alpha: 150,
            handle: Rgba::rgb(0, 0, 255),
        }
    }
}

/// Largest accepted `handle_size` and `border`.
pub const MAX_INSET: i32 = 1024;

/// Preview widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Side length of the square corner handles, in canvas pixels.
    pub handle_size: i32,
    /// Inset between the widget edge and the drawable area.
    pub border: i32,
    /// Smallest area the widget asks its host for.
    pub min_widget_size: PixelSize,
    pub palette: Palette,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            handle_size: 8,
            border: 1,
            min_widget_size: PixelSize::new(100, 50),
            palette: Palette::default(),
        }
    }
}

impl PreviewConfig {
    /// Smallest preview width/height of the overlay, so that two handles fit.
    pub fn min_preview_size(&self) -> i32 {
        self.handle_size.saturating_mul(2).saturating_add(2)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_INSET).contains(&self.handle_size) {
            return Err(ConfigError::Invalid(format!(
                "handle_size must be between 1 and {}, got {}",
                MAX_INSET, self.handle_size
            )));
        }
        if !(0..=MAX_INSET).contains(&self.border) {
            return Err(ConfigError::Invalid(format!(
                "border must be between 0 and {}, got {}",
                MAX_INSET, self.border
            )));
        }
        if self.min_widget_size.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "min_widget_size must be positive, got {}x{}",
                self.min_widget_size.width, self.min_widget_size.height
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: PreviewConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded preview config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
