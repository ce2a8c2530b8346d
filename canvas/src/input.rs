//! Input model: unified pointer sources and the drawing state machine.
//!
//! Mouse and touch events are reduced to the same three calls on the engine
//! (down, move, end). `InputState` is the gesture tracked between
//! pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::viewport::Point;

/// Why a stroke ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Mouse button released over the surface.
    PointerUp,
    /// Mouse left the surface while drawing.
    PointerLeave,
    /// Finger lifted.
    TouchEnd,
}

/// Internal state for the drawing state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No stroke in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A stroke is in progress.
    Drawing {
        /// Surface-local position of the previous pointer event; the next
        /// segment starts here.
        last: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
