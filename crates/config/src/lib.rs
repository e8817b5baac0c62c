//! Shared configuration for Inkshare
//!
//! This crate provides the single source of truth for drawing surface
//! dimensions, display scaling, boundary guide placement and the default pen
//! shared by the painting core and the replay tool.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default surface width in pixels
pub const DEFAULT_WIDTH: u32 = 800;

/// Default surface height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;

/// Default device pixel scale (1.0 = no scaling)
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default distance of the boundary guides from each edge
pub const DEFAULT_EDGE_INSET: f32 = 20.0;

/// Default pen color token
pub const DEFAULT_PEN_COLOR: &str = "#000000";

/// Default pen width in pixels
pub const DEFAULT_PEN_SIZE: f32 = 4.0;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "INKSHARE_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Which surface edges get a boundary guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for GuideEdges {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

impl GuideEdges {
    /// No guides at all
    pub fn none() -> Self {
        Self {
            top: false,
            bottom: false,
            left: false,
            right: false,
        }
    }
}

/// Pen used before the application picks one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenDefaults {
    pub color: String,
    pub size: f32,
}

impl Default for PenDefaults {
    fn default() -> Self {
        Self {
            color: DEFAULT_PEN_COLOR.to_string(),
            size: DEFAULT_PEN_SIZE,
        }
    }
}

/// Board configuration for surfaces, guides and cursor rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Surface width in logical pixels
    pub width: u32,
    /// Surface height in logical pixels
    pub height: u32,
    /// Device pixel scale used for crisp cursor bitmaps
    pub scale: f32,
    /// Distance of each boundary guide from its edge
    pub edge_inset: f32,
    pub guides: GuideEdges,
    pub pen: PenDefaults,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            edge_inset: DEFAULT_EDGE_INSET,
            guides: GuideEdges::default(),
            pen: PenDefaults::default(),
        }
    }
}

impl BoardConfig {
    /// Create a new board config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `INKSHARE_CONFIG`, or fall back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Check the values the renderer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "surface size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !(self.edge_inset.is_finite() && self.edge_inset >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "edge_inset must be non-negative, got {}",
                self.edge_inset
            )));
        }
        if !(self.pen.size.is_finite() && self.pen.size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pen size must be positive, got {}",
                self.pen.size
            )));
        }
        Ok(())
    }

    /// Get width as f32 for calculations
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    /// Get height as f32 for calculations
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}
