//! Immutable raster captures used by the undo history and for submission.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::fmt;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};

use crate::error::CanvasError;

/// Prefix of the data URL produced by [`RasterSnapshot::to_data_url`].
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A capture of the full drawing surface at one instant.
///
/// Cloning is cheap: the pixels are shared behind an `Arc` and never mutated
/// after capture. Encoding happens on demand, so undo can restore pixels
/// directly without a decode step.
#[derive(Clone, PartialEq)]
pub struct RasterSnapshot {
    pixels: Arc<RgbaImage>,
}

impl RasterSnapshot {
    pub(crate) fn capture(image: &RgbaImage) -> Self {
        Self { pixels: Arc::new(image.clone()) }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The captured RGBA pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Encode the capture as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Encode`] if the PNG encoder rejects the buffer.
    pub fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.pixels.as_raw(),
            self.pixels.width(),
            self.pixels.height(),
            ColorType::Rgba8,
        )?;
        Ok(bytes)
    }

    /// Encode the capture as a self-contained `data:image/png;base64,...` URL.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Encode`] if PNG encoding fails.
    pub fn to_data_url(&self) -> Result<String, CanvasError> {
        let png = self.encode_png()?;
        let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len() * 4 / 3 + 4);
        url.push_str(PNG_DATA_URL_PREFIX);
        general_purpose::STANDARD.encode_string(&png, &mut url);
        Ok(url)
    }
}

impl fmt::Debug for RasterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterSnapshot")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}
