#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A point in either client (page) or surface-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen placement of the drawing surface.
///
/// `left` / `top` are the CSS-pixel offsets of the surface's bounding box
/// relative to the client viewport, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Convert a client-space point (mouse or touch position) to surface-local coordinates.
    #[must_use]
    pub fn client_to_surface(&self, client: Point) -> Point {
        Point { x: client.x - self.left, y: client.y - self.top }
    }
}
