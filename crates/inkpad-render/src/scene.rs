//! Frame projection: canvas state to ordered polyline draw commands.

use crate::renderer::{RenderContext, RenderResult, Renderer};
use inkpad_core::stroke::Stroke;
use kurbo::{Affine, BezPath, Rect, Vec2};
use peniko::Color;

/// The viewport transform the host applies around the emitted commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate: Vec2,
}

impl ViewTransform {
    /// The equivalent affine (translate ∘ scale), canvas to screen.
    pub fn affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

/// One stroke ready for the host to draw: an open polyline path, a brush
/// color, and a stroke width. No fill, no closing segment.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub path: BezPath,
    pub color: Color,
    /// Width in canvas units, already divided by the current zoom so the
    /// drawn line keeps a constant apparent thickness on screen.
    pub width: f64,
}

/// A complete projected frame.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Draw commands in paint order: committed strokes oldest first, then
    /// the in-progress stroke on top.
    pub commands: Vec<DrawCommand>,
    /// Viewport transform to apply around the commands.
    pub view: ViewTransform,
    /// Background image reference, passed through untouched.
    pub background_image: Option<String>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

/// Project the canvas into a frame.
///
/// Pure: the same canvas state always produces the same frame, and nothing
/// is mutated. Committed strokes whose bounds fall entirely outside the
/// visible canvas rect are skipped; the in-progress stroke is always
/// emitted so capture feedback can never disappear mid-gesture.
pub fn build_frame(ctx: &RenderContext) -> Frame {
    let canvas = ctx.canvas;
    let viewport = canvas.viewport();
    let scale = viewport.current_scale();
    let visible = viewport.visible_rect();

    let mut commands = Vec::with_capacity(canvas.strokes().len() + 1);
    let mut culled = 0usize;
    for stroke in canvas.strokes() {
        if !rects_overlap(visible, stroke.bounds()) {
            culled += 1;
            continue;
        }
        commands.push(command_for(stroke, scale));
    }
    if culled > 0 {
        log::trace!("culled {culled} of {} strokes", canvas.strokes().len());
    }

    if let Some(current) = canvas.current_stroke() {
        commands.push(command_for(current, scale));
    }

    Frame {
        commands,
        view: ViewTransform {
            scale,
            translate: viewport.current_translate(),
        },
        background_image: canvas.background_image().map(str::to_owned),
    }
}

fn command_for(stroke: &Stroke, scale: f64) -> DrawCommand {
    DrawCommand {
        path: stroke.to_path(),
        color: stroke.style.color.into(),
        width: stroke.style.width / scale,
    }
}

/// Inclusive overlap test; a degenerate (single-point) bounds still counts.
fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Backend that projects the canvas into a [`Frame`] of vector commands.
#[derive(Debug, Clone, Default)]
pub struct VectorRenderer {
    frame: Frame,
}

impl VectorRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame built by the last `build_scene` call.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Renderer for VectorRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        self.frame = build_frame(ctx);
        Ok(())
    }
}
