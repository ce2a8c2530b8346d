//! Drawing surface for the handwritten-digit pad.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! raster the user draws on: translating pointer input into stroke segments,
//! keeping a bounded undo history of snapshots, and deciding whether the
//! raster holds anything worth sending to the classifier. The host layer only
//! wires DOM events to the engine and ships committed snapshots to the
//! prediction service.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser [`engine::Engine`] and testable [`engine::EngineCore`] |
//! | [`input`] | Drawing state machine and stroke end reasons |
//! | [`raster`] | Pixel buffer, stroke rasterization, restore |
//! | [`snapshot`] | Immutable captures and PNG / data-URL encoding |
//! | [`history`] | Bounded undo stack |
//! | [`blank`] | Brightness-fraction blank detector |
//! | [`viewport`] | Points and client-to-surface conversion |
//! | [`config`] | Host-supplied surface configuration |
//! | [`consts`] | Shared numeric constants (sizes, thresholds, capacity) |

pub mod blank;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod raster;
pub mod snapshot;
pub mod viewport;

pub use config::SurfaceConfig;
pub use error::CanvasError;
