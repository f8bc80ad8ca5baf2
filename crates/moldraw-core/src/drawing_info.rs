//! Shared drawing context.
//!
//! `DrawingInfo` carries the scale factor every connector reads when it
//! sizes its arrowhead and strokes. The application owns and mutates it;
//! drawing items hold a [`Shared`](crate::types::Shared) handle and only
//! read from it.

use crate::error::DrawingError;
use serde::{Deserialize, Serialize};

/// Default scene width in scene units.
pub const DEFAULT_SCENE_WIDTH: f64 = 800.0;
/// Default scene height in scene units.
pub const DEFAULT_SCENE_HEIGHT: f64 = 600.0;
/// Scene extent divided by this gives the scale factor at zoom 1.0.
pub const SCALE_FACTOR_DIVISOR: f64 = 10.0;

/// Scene extents, zoom and the derived scale factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingInfo {
    width: f64,
    height: f64,
    zoom: f64,
    scale_factor: f64,
}

impl Default for DrawingInfo {
    fn default() -> Self {
        let mut info = Self {
            width: DEFAULT_SCENE_WIDTH,
            height: DEFAULT_SCENE_HEIGHT,
            zoom: 1.0,
            scale_factor: 1.0,
        };
        info.determine_scale_factor();
        info
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl DrawingInfo {
    /// Creates a context for a scene of the given size at zoom 1.0 and
    /// derives its scale factor.
    pub fn new(width: f64, height: f64) -> Result<Self, DrawingError> {
        let mut info = Self::default();
        info.set_scene_size(width, height)?;
        Ok(info)
    }

    /// Creates a context with an explicit scale factor, leaving the scene
    /// size at its defaults.
    pub fn with_scale_factor(scale_factor: f64) -> Result<Self, DrawingError> {
        let mut info = Self::default();
        info.set_scale_factor(scale_factor)?;
        Ok(info)
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Overrides the scale factor directly.
    pub fn set_scale_factor(&mut self, scale_factor: f64) -> Result<(), DrawingError> {
        if !is_positive(scale_factor) {
            return Err(DrawingError::InvalidScaleFactor {
                value: scale_factor,
            });
        }
        tracing::debug!(scale_factor, "Scale factor set");
        self.scale_factor = scale_factor;
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Resizes the scene and re-derives the scale factor.
    pub fn set_scene_size(&mut self, width: f64, height: f64) -> Result<(), DrawingError> {
        if !is_positive(width) || !is_positive(height) {
            return Err(DrawingError::InvalidSceneSize {
                width,
                height,
                zoom: self.zoom,
            });
        }
        self.width = width;
        self.height = height;
        self.determine_scale_factor();
        Ok(())
    }

    /// Changes the zoom level and re-derives the scale factor.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), DrawingError> {
        if !is_positive(zoom) {
            return Err(DrawingError::InvalidSceneSize {
                width: self.width,
                height: self.height,
                zoom,
            });
        }
        self.zoom = zoom;
        self.determine_scale_factor();
        Ok(())
    }

    /// Derives the scale factor from the scene size and zoom:
    /// `zoom * min(width, height) / 10`.
    pub fn determine_scale_factor(&mut self) {
        self.scale_factor = self.zoom * self.width.min(self.height) / SCALE_FACTOR_DIVISOR;
        tracing::debug!(
            width = self.width,
            height = self.height,
            zoom = self.zoom,
            scale_factor = self.scale_factor,
            "Determined scale factor"
        );
    }
}
