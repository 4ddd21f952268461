//! Inkpad Core Library
//!
//! Platform-agnostic stroke-capture and viewport engine for the Inkpad
//! drawing surface: gesture arbitration, coordinate transforms, stroke
//! history, and the tool policy. Rendering lives in `inkpad-render`.

pub mod canvas;
pub mod gesture;
pub mod history;
pub mod input;
pub mod stroke;
pub mod tools;
pub mod viewport;

pub use canvas::Canvas;
pub use gesture::{GestureArbiter, InteractionMode, StartOutcome};
pub use history::StrokeHistory;
pub use input::{GestureEvent, GesturePhase};
pub use stroke::{Stroke, StrokeColor, StrokeId, StrokeStyle};
pub use tools::{ToolKind, ToolManager};
pub use viewport::{Viewport, MAX_ZOOM, MIN_ZOOM};
