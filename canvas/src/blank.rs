//! Blank detection: decide whether the raster holds anything worth classifying.
//!
//! A pixel counts as background when every color channel is above
//! [`BRIGHTNESS_THRESHOLD`]. Alpha is ignored; the raster is always opaque.

#[cfg(test)]
#[path = "blank_test.rs"]
mod blank_test;

use image::RgbaImage;

use crate::consts::{BRIGHTNESS_THRESHOLD, DEFAULT_BLANK_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlankDetector {
    threshold: f64,
}

impl Default for BlankDetector {
    fn default() -> Self {
        Self { threshold: DEFAULT_BLANK_THRESHOLD }
    }
}

impl BlankDetector {
    /// `threshold` is the background fraction at or above which a raster is blank.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Fraction of pixels that are background, in `[0, 1]`. Empty images report `1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn background_fraction(&self, image: &RgbaImage) -> f64 {
        let total = u64::from(image.width()) * u64::from(image.height());
        if total == 0 {
            return 1.0;
        }
        let background = image.pixels().filter(|px| is_background(px.0)).count();
        background as f64 / total as f64
    }

    #[must_use]
    pub fn is_blank(&self, image: &RgbaImage) -> bool {
        self.background_fraction(image) >= self.threshold
    }
}

fn is_background([r, g, b, _]: [u8; 4]) -> bool {
    r > BRIGHTNESS_THRESHOLD && g > BRIGHTNESS_THRESHOLD && b > BRIGHTNESS_THRESHOLD
}
