//! Inkpad Render Library
//!
//! Renderer abstraction and the frame projector for the Inkpad drawing
//! surface: turns engine state into ordered polyline draw commands plus the
//! viewport transform for the host to apply.

pub mod renderer;
pub mod scene;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use scene::{build_frame, DrawCommand, Frame, VectorRenderer, ViewTransform};
