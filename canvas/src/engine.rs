use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, ImageData, MouseEvent, TouchEvent};

use crate::config::SurfaceConfig;
use crate::history::HistoryStack;
use crate::input::{EndReason, InputState};
use crate::raster::{Raster, StrokeStyle};
use crate::snapshot::RasterSnapshot;
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Suppress the platform's default handling of the triggering event
    /// (page scroll on touch-drag, text selection on mouse-drag).
    PreventDefault,
    /// The raster changed and should be repainted.
    RenderNeeded,
    /// A snapshot was committed; `depth` is the history size afterwards.
    SnapshotCommitted { depth: usize },
    /// A stroke finished and was committed as a snapshot.
    StrokeCommitted { depth: usize, reason: EndReason },
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub raster: Raster,
    pub history: HistoryStack,
    pub input: InputState,
    pub viewport: Viewport,
    pub style: StrokeStyle,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(&SurfaceConfig::default())
    }
}

impl EngineCore {
    /// Build a blank surface and seed the history with its snapshot.
    #[must_use]
    pub fn new(config: &SurfaceConfig) -> Self {
        let raster = Raster::new(config.width, config.height, config.background_rgb);
        let history = HistoryStack::new(raster.snapshot(), config.history_capacity);
        Self {
            raster,
            history,
            input: InputState::Idle,
            viewport: Viewport::default(),
            style: StrokeStyle::new(config.stroke_width, config.stroke_rgb),
        }
    }

    /// Update the surface's on-screen offset used to localize pointer positions.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Input events ---

    /// Begin a stroke at the given client-space position.
    ///
    /// A second pointer-down mid-stroke simply restarts the path there.
    pub fn on_pointer_down(&mut self, client: Point) -> Vec<Action> {
        let start = self.viewport.client_to_surface(client);
        self.input = InputState::Drawing { last: start };
        vec![Action::PreventDefault]
    }

    /// Extend the current stroke to the given client-space position.
    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        let InputState::Drawing { last } = self.input else {
            return Vec::new();
        };
        let next = self.viewport.client_to_surface(client);
        self.raster.stroke_segment(last, next, &self.style);
        self.input = InputState::Drawing { last: next };
        vec![Action::PreventDefault, Action::RenderNeeded]
    }

    /// Finish the current stroke and commit a snapshot.
    pub fn on_pointer_end(&mut self, reason: EndReason) -> Vec<Action> {
        if !self.input.is_drawing() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        self.history.push(self.raster.snapshot());
        vec![Action::StrokeCommitted { depth: self.history.len(), reason }]
    }

    // --- Commands ---

    /// Repaint the background and restart history from the blank raster.
    pub fn clear(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        self.raster.fill_background();
        self.history.reset(self.raster.snapshot());
        vec![Action::RenderNeeded, Action::SnapshotCommitted { depth: 1 }]
    }

    /// Step back one snapshot. Returns no actions when there is nothing to undo.
    pub fn undo(&mut self) -> Vec<Action> {
        let Some(previous) = self.history.undo() else {
            return Vec::new();
        };
        self.raster.restore(previous);
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The last committed snapshot. Equal to the visible raster whenever no
    /// stroke is in progress.
    #[must_use]
    pub fn committed(&self) -> &RasterSnapshot {
        self.history.top()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element and size the
    /// element's backing store to the raster.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: &SurfaceConfig) -> Self {
        canvas.set_width(config.width);
        canvas.set_height(config.height);
        Self { canvas, core: EngineCore::new(config) }
    }

    // --- DOM input events ---

    /// # Errors
    ///
    /// Propagates canvas rendering failures from the browser.
    pub fn on_mouse_down(&mut self, ev: &MouseEvent) -> Result<(), JsValue> {
        self.sync_viewport();
        let actions = self.core.on_pointer_down(mouse_point(ev));
        self.apply(ev, &actions)
    }

    /// # Errors
    ///
    /// Propagates canvas rendering failures from the browser.
    pub fn on_mouse_move(&mut self, ev: &MouseEvent) -> Result<(), JsValue> {
        self.sync_viewport();
        let actions = self.core.on_pointer_move(mouse_point(ev));
        self.apply(ev, &actions)
    }

    /// # Errors
    ///
    /// Propagates canvas rendering failures from the browser.
    pub fn on_mouse_up(&mut self, ev: &MouseEvent) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_end(EndReason::PointerUp);
        self.apply(ev, &actions)
    }

    /// # Errors
    ///
    /// Propagates canvas rendering failures from the browser.
    pub fn on_mouse_leave(&mut self, ev: &MouseEvent) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_end(EndReason::PointerLeave);
        self.apply(ev, &actions)
    }

    /// Only the first touch point drives the stroke.
    ///
    /// # Errors
    ///
    /// Propagates canvas rendering failures from the browser.
    pub fn on_touch_start(&mut self, ev: &TouchEvent) -> Result<(), JsValue> {
        let Some(point) = touch_point(ev) else {
            return Ok(());
        };
        self.sync_viewport();
        let actions = self.core.on_pointer_down(point);
        self.apply(ev, &actions)
    }

    /// # Errors
    ///
    /// Propagates canvas rendering failures from the browser.
    pub fn on_touch_move(&mut self, ev: &TouchEvent) -> Result<(), JsValue> {
        let Some(point) = touch_point(ev) else {
            return Ok(());
        };
        self.sync_viewport();
        let actions = self.core.on_pointer_move(point);
        self.apply(ev, &actions)
    }

    /// # Errors
    ///
    /// Propagates canvas rendering failures from the browser.
    pub fn on_touch_end(&mut self, ev: &TouchEvent) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_end(EndReason::TouchEnd);
        self.apply(ev, &actions)
    }

    // --- Commands ---

    /// # Errors
    ///
    /// Propagates canvas rendering failures from the browser.
    pub fn clear(&mut self) -> Result<(), JsValue> {
        self.core.clear();
        self.render()
    }

    /// Returns whether anything was undone.
    ///
    /// # Errors
    ///
    /// Propagates canvas rendering failures from the browser.
    pub fn undo(&mut self) -> Result<bool, JsValue> {
        if self.core.undo().is_empty() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    // --- Render ---

    /// Blit the raster onto the canvas element.
    ///
    /// # Errors
    ///
    /// Fails if the 2D context is unavailable or the browser rejects the image data.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let raster = &self.core.raster;
        let data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(raster.as_bytes()), raster.width(), raster.height())?;
        ctx.put_image_data(&data, 0.0, 0.0)
    }

    fn sync_viewport(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.core.set_viewport(Viewport::new(rect.left(), rect.top()));
    }

    fn apply(&self, ev: &Event, actions: &[Action]) -> Result<(), JsValue> {
        for action in actions {
            match action {
                Action::PreventDefault => ev.prevent_default(),
                Action::RenderNeeded => self.render()?,
                Action::SnapshotCommitted { .. } | Action::StrokeCommitted { .. } => {}
            }
        }
        Ok(())
    }
}

fn mouse_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn touch_point(ev: &TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}
