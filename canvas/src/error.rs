//! Errors produced by the canvas crate.

/// Failures surfaced by raster encoding and surface configuration.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// The raster could not be encoded as PNG.
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// A surface configuration document could not be parsed or is out of range.
    #[error("invalid surface config: {0}")]
    Config(String),
}
