//! Shared numeric constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Default raster width in pixels.
pub const DEFAULT_WIDTH: u32 = 280;

/// Default raster height in pixels.
pub const DEFAULT_HEIGHT: u32 = 280;

/// Opaque white. Exported PNGs keep no transparency, so the background
/// is always painted explicitly.
pub const BACKGROUND_RGB: [u8; 3] = [0xFF, 0xFF, 0xFF];

// ── Stroke ──────────────────────────────────────────────────────

/// Default stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 18.0;

/// Default stroke color (solid black).
pub const STROKE_RGB: [u8; 3] = [0x00, 0x00, 0x00];

// ── History ─────────────────────────────────────────────────────

/// Maximum number of snapshots retained for undo.
pub const HISTORY_CAPACITY: usize = 10;

// ── Blank detection ─────────────────────────────────────────────

/// A channel value strictly above this counts as "bright".
pub const BRIGHTNESS_THRESHOLD: u8 = 245;

/// Fraction of background pixels at or above which the raster is blank.
pub const DEFAULT_BLANK_THRESHOLD: f64 = 0.98;
