//! The live pixel surface: background fill, stroke rasterization, capture and restore.
//!
//! Strokes are drawn as capsules (a segment swept by a disc), which yields
//! round caps and round joins for free when consecutive segments share an
//! endpoint. There is no anti-aliasing; the classifier downstream works on a
//! thresholded image anyway.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use image::{Rgba, RgbaImage};

use crate::snapshot::RasterSnapshot;
use crate::viewport::Point;

/// Fixed pen used for every segment of every stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in pixels (diameter of the round cap).
    pub width: f64,
    /// Solid, fully opaque stroke color.
    pub color: Rgba<u8>,
}

impl StrokeStyle {
    #[must_use]
    pub fn new(width: f64, rgb: [u8; 3]) -> Self {
        Self { width, color: opaque(rgb) }
    }
}

/// Build an opaque RGBA pixel from an RGB triple.
#[must_use]
pub fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 0xFF])
}

/// RGBA raster owned by the drawing surface.
pub struct Raster {
    image: RgbaImage,
    background: Rgba<u8>,
}

impl Raster {
    /// Create a raster already painted with the background color.
    #[must_use]
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        let background = opaque(background);
        Self { image: RgbaImage::from_pixel(width, height, background), background }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[must_use]
    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Raw RGBA bytes, row-major, suitable for `ImageData`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Repaint every pixel with the opaque background color.
    pub fn fill_background(&mut self) {
        let bg = self.background;
        for px in self.image.pixels_mut() {
            *px = bg;
        }
    }

    /// Rasterize one segment of a stroke.
    ///
    /// Coordinates are surface-local; anything outside the raster is clipped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return;
        }
        let radius = (style.width / 2.0).max(0.5);
        let radius_sq = radius * radius;

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(f64::from(w - 1));
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_y = (from.y.max(to.y) + radius).ceil().min(f64::from(h - 1));
        if max_x < min_x || max_y < min_y {
            return;
        }

        for y in (min_y as u32)..=(max_y as u32) {
            for x in (min_x as u32)..=(max_x as u32) {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if distance_sq_to_segment(center, from, to) <= radius_sq {
                    self.image.put_pixel(x, y, style.color);
                }
            }
        }
    }

    /// Capture the current pixels.
    #[must_use]
    pub fn snapshot(&self) -> RasterSnapshot {
        RasterSnapshot::capture(&self.image)
    }

    /// Repaint the raster from a snapshot.
    ///
    /// The background is painted first and the snapshot drawn at the origin,
    /// so a snapshot of a different size leaves the uncovered area blank.
    pub fn restore(&mut self, snapshot: &RasterSnapshot) {
        let src = snapshot.pixels();
        if src.dimensions() == self.image.dimensions() {
            self.image.clone_from(src);
            return;
        }
        self.fill_background();
        let w = src.width().min(self.width());
        let h = src.height().min(self.height());
        for y in 0..h {
            for x in 0..w {
                self.image.put_pixel(x, y, *src.get_pixel(x, y));
            }
        }
    }
}

fn distance_sq_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let cx = a.x + t * dx - p.x;
    let cy = a.y + t * dy - p.y;
    cx * cx + cy * cy
}
