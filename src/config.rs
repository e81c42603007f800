use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::DEFAULT_OVAL_SEGMENTS;
use crate::stroke::{BrushStyle, BrushTip};
use crate::tool::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, Tool};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "SHAPE_PAINT_CONFIG";

/// Fewest points an oval outline may be sampled with
pub const MIN_OVAL_SEGMENTS: usize = 8;

/// Startup settings for the canvas. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub draw_color: Color32,
    pub background_color: Color32,
    pub brush_size: i32,
    pub brush_tip: BrushTip,
    pub brush_style: BrushStyle,
    pub tool: Tool,
    /// Points used to approximate an oval outline
    pub oval_segments: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            draw_color: Color32::BLACK,
            background_color: Color32::WHITE,
            brush_size: 5,
            brush_tip: BrushTip::Round,
            brush_style: BrushStyle::Solid,
            tool: Tool::Pen,
            oval_segments: DEFAULT_OVAL_SEGMENTS,
        }
    }
}

impl CanvasConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads the file named by `SHAPE_PAINT_CONFIG`, or defaults when it is unset
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading canvas config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Brush sizes outside 1..=100 are accepted here and clamped by the tool state
    pub fn validate(&self) -> ConfigResult<()> {
        if self.oval_segments < MIN_OVAL_SEGMENTS {
            return Err(ConfigError::Invalid(format!(
                "oval_segments must be at least {MIN_OVAL_SEGMENTS}, got {}",
                self.oval_segments
            )));
        }
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.brush_size) {
            log::warn!(
                "brush_size {} outside {MIN_BRUSH_SIZE}..={MAX_BRUSH_SIZE}, it will be clamped",
                self.brush_size
            );
        }
        Ok(())
    }
}
