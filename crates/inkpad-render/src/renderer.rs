//! Renderer trait abstraction.

use inkpad_core::Canvas;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Color used to clear the surface behind the background image.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the default white surface.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            background_color: Color::from_rgba8(255, 255, 255, 255),
        }
    }

    /// Set the clear color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Trait for rendering backends.
///
/// A backend turns the canvas state into whatever its target consumes; the
/// built-in [`VectorRenderer`](crate::scene::VectorRenderer) produces an
/// ordered draw-command list for hosts that stroke paths themselves.
pub trait Renderer {
    /// Build the frame for the current canvas state.
    ///
    /// Called once per frame; must be a pure projection of the context with
    /// no canvas side effects.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
