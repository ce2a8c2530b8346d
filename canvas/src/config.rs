//! Surface configuration supplied by the host page.
//!
//! The host may pass a JSON object; any missing field falls back to the
//! defaults in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{BACKGROUND_RGB, DEFAULT_HEIGHT, DEFAULT_STROKE_WIDTH, DEFAULT_WIDTH, HISTORY_CAPACITY, STROKE_RGB};
use crate::error::CanvasError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub stroke_width: f64,
    pub stroke_rgb: [u8; 3],
    pub background_rgb: [u8; 3],
    pub history_capacity: usize,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_rgb: STROKE_RGB,
            background_rgb: BACKGROUND_RGB,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

impl SurfaceConfig {
    /// Parse a JSON config object, validating ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] for malformed JSON or out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, CanvasError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| CanvasError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a drawable surface.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CanvasError> {
        if self.width == 0 || self.height == 0 {
            return Err(CanvasError::Config(format!("surface must be non-empty, got {}x{}", self.width, self.height)));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(CanvasError::Config(format!("stroke_width must be positive, got {}", self.stroke_width)));
        }
        if self.history_capacity == 0 {
            return Err(CanvasError::Config("history_capacity must be at least 1".to_owned()));
        }
        Ok(())
    }
}
