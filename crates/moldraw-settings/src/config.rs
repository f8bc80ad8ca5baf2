//! Configuration for MolDraw
//!
//! Configuration is organized into logical sections:
//! - Drawing settings (scene size, zoom, scale factor override)
//! - Render settings (background, anti-aliasing, output format)
//! - Interaction settings (pick tolerance)
//!
//! Files are JSON or TOML, chosen by extension.

use crate::error::{ConfigError, SettingsResult};
use moldraw_core::drawing_info::{DEFAULT_SCENE_HEIGHT, DEFAULT_SCENE_WIDTH};
use moldraw_core::{Color, DrawingInfo};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "moldraw";
/// Config file name inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raster PNG image
    #[default]
    Png,
    /// SVG document
    Svg,
}

impl OutputFormat {
    /// Picks the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "png"),
            Self::Svg => write!(f, "svg"),
        }
    }
}

/// Drawing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Scene width in scene units
    pub scene_width: f64,
    /// Scene height in scene units
    pub scene_height: f64,
    /// Zoom level (1.0 = 100%)
    pub zoom: f64,
    /// Fixed scale factor; derived from scene size and zoom when unset
    pub scale_factor: Option<f64>,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            scene_width: DEFAULT_SCENE_WIDTH,
            scene_height: DEFAULT_SCENE_HEIGHT,
            zoom: 1.0,
            scale_factor: None,
        }
    }
}

impl DrawingSettings {
    /// Builds the drawing context these settings describe.
    pub fn to_drawing_info(&self) -> SettingsResult<DrawingInfo> {
        let mut info = DrawingInfo::new(self.scene_width, self.scene_height)?;
        info.set_zoom(self.zoom)?;
        if let Some(scale_factor) = self.scale_factor {
            info.set_scale_factor(scale_factor)?;
        }
        Ok(info)
    }
}

/// Render settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Background fill
    pub background: Color,
    /// Anti-alias raster output
    pub anti_alias: bool,
    /// Format used when the output path has no recognised extension
    pub output_format: OutputFormat,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            anti_alias: true,
            output_format: OutputFormat::Png,
        }
    }
}

/// Interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Extra pick distance around connector shafts, in scene units
    pub pick_tolerance: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            pick_tolerance: 2.0,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Drawing settings
    pub drawing: DrawingSettings,
    /// Render settings
    pub render: RenderSettings,
    /// Interaction settings
    pub interaction: InteractionSettings,
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, e.g. `~/.config/moldraw/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Loads `path` when given, otherwise the default location if a file
    /// exists there, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let drawing = &self.drawing;
        if !is_positive(drawing.scene_width) {
            return Err(out_of_range("drawing.scene_width", drawing.scene_width));
        }
        if !is_positive(drawing.scene_height) {
            return Err(out_of_range("drawing.scene_height", drawing.scene_height));
        }
        if !is_positive(drawing.zoom) {
            return Err(out_of_range("drawing.zoom", drawing.zoom));
        }
        if let Some(scale_factor) = drawing.scale_factor {
            if !is_positive(scale_factor) {
                return Err(out_of_range("drawing.scale_factor", scale_factor));
            }
        }

        let tolerance = self.interaction.pick_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            tracing::warn!(tolerance, "Rejected pick tolerance");
            return Err(out_of_range("interaction.pick_tolerance", tolerance));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.render.output_format, OutputFormat::Png);
        let info = config.drawing.to_drawing_info().unwrap();
        assert_eq!(info.scale_factor(), 60.0);
    }

    #[test]
    fn test_scale_factor_override() {
        let mut config = Config::new();
        config.drawing.zoom = 2.0;
        assert_eq!(config.drawing.to_drawing_info().unwrap().scale_factor(), 120.0);

        config.drawing.scale_factor = Some(15.0);
        assert_eq!(config.drawing.to_drawing_info().unwrap().scale_factor(), 15.0);
    }

    #[test]
    fn test_to_drawing_info_rejects_bad_zoom() {
        let mut config = Config::new();
        config.drawing.zoom = -2.0;
        assert!(matches!(
            config.drawing.to_drawing_info(),
            Err(crate::SettingsError::Drawing(
                moldraw_core::DrawingError::InvalidSceneSize { .. }
            ))
        ));
    }

    #[test]
    fn test_validate_rejects() {
        let mut config = Config::new();
        config.drawing.zoom = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange {
                key: "drawing.zoom".to_string(),
                value: "0".to_string(),
            })
        );

        let mut config = Config::new();
        config.drawing.scale_factor = Some(-1.0);
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.interaction.pick_tolerance = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.interaction.pick_tolerance = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a/b.SVG")),
            Some(OutputFormat::Svg)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.png")),
            Some(OutputFormat::Png)
        );
        assert_eq!(OutputFormat::from_path(Path::new("out")), None);
        assert_eq!(OutputFormat::Svg.to_string(), "svg");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[drawing]\nzoom = 3.0\n").unwrap();
        assert_eq!(config.drawing.zoom, 3.0);
        assert_eq!(config.drawing.scene_width, DEFAULT_SCENE_WIDTH);
        assert_eq!(config.render, RenderSettings::default());
    }
}
