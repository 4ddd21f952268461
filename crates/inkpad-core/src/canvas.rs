//! The drawing surface engine: gesture routing, stroke state, and the
//! imperative control surface exposed to the host UI.

use crate::gesture::{GestureArbiter, InteractionMode, StartOutcome};
use crate::history::StrokeHistory;
use crate::input::{GestureEvent, GesturePhase};
use crate::stroke::Stroke;
use crate::tools::{ToolKind, ToolManager};
use crate::viewport::Viewport;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A freehand drawing surface session.
///
/// Owns the committed history, the in-progress stroke, the view transform,
/// and the gesture arbiter. Created once per canvas mount with the initial
/// viewport dimensions (which fix the logical canvas bounds) and destroyed
/// with it; drawings are ephemeral, in-memory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    history: StrokeHistory,
    tools: ToolManager,
    viewport: Viewport,
    arbiter: GestureArbiter,
    background_image: Option<String>,
}

impl Canvas {
    /// Create a canvas whose logical bounds match the given viewport size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            history: StrokeHistory::new(),
            tools: ToolManager::new(),
            viewport: Viewport::new(width, height),
            arbiter: GestureArbiter::new(),
            background_image: None,
        }
    }

    // --- Control surface (host toolbar) ---

    /// Remove the most recent stroke. No-op when the history is empty.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Restore the most recently undone stroke. No-op when nothing is
    /// redoable.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Select the tool used for strokes started from now on. Does not
    /// restyle a stroke already in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!("tool set to {tool:?}");
        self.tools.set_tool(tool);
    }

    /// Replace the background image reference. Opaque to the engine; it is
    /// handed back to the renderer untouched and never affects strokes or
    /// history.
    pub fn set_background_image(&mut self, uri: Option<String>) {
        self.background_image = uri;
    }

    // --- Host environment inputs ---

    /// Report the canvas origin in screen space once layout is measured.
    pub fn set_origin(&mut self, origin: Point) {
        self.viewport.set_origin(origin);
    }

    /// Advance time-based view animation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.viewport.tick(dt);
    }

    /// Route one recognized gesture event.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Draw { phase, position } => self.handle_draw(phase, position),
            GestureEvent::Pan { phase, translation } => self.handle_pan(phase, translation),
            GestureEvent::Pinch { phase, scale } => self.handle_pinch(phase, scale),
        }
    }

    fn handle_draw(&mut self, phase: GesturePhase, position: Point) {
        match phase {
            GesturePhase::Began => {
                if self.arbiter.draw_began() == StartOutcome::Accepted {
                    let point = self.viewport.screen_to_canvas(position);
                    self.tools.begin(point);
                }
            }
            GesturePhase::Changed => {
                // Checked on every update: a pinch or pan takeover has
                // already left Drawing, so late samples are dropped.
                if self.arbiter.is_drawing() {
                    self.tools.append(self.viewport.screen_to_canvas(position));
                }
            }
            GesturePhase::Ended => {
                if self.arbiter.is_drawing() {
                    self.arbiter.draw_finished();
                    if let Some(stroke) = self.tools.finish() {
                        self.history.commit(stroke);
                    }
                }
            }
            GesturePhase::Cancelled => {
                if self.arbiter.is_drawing() {
                    self.arbiter.draw_finished();
                    self.tools.cancel();
                }
            }
        }
    }

    fn handle_pan(&mut self, phase: GesturePhase, translation: Vec2) {
        match phase {
            GesturePhase::Began => match self.arbiter.pan_began() {
                StartOutcome::Ignored => {}
                outcome => {
                    if outcome == StartOutcome::AcceptedCancellingDraw {
                        self.tools.cancel();
                    }
                    self.viewport.pan_begin();
                }
            },
            GesturePhase::Changed => {
                if self.arbiter.is_panning() {
                    self.viewport.pan_update(translation);
                }
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                if self.arbiter.is_panning() {
                    self.arbiter.pan_finished();
                    self.viewport.pan_update(translation);
                    self.viewport.pan_release();
                }
            }
        }
    }

    fn handle_pinch(&mut self, phase: GesturePhase, scale: f64) {
        match phase {
            GesturePhase::Began => match self.arbiter.pinch_began() {
                StartOutcome::Ignored => {}
                outcome => {
                    if outcome == StartOutcome::AcceptedCancellingDraw {
                        self.tools.cancel();
                    }
                    self.viewport.pinch_begin();
                }
            },
            GesturePhase::Changed => {
                if self.arbiter.is_pinching() {
                    self.viewport.pinch_update(scale);
                }
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                if self.arbiter.is_pinching() {
                    self.arbiter.pinch_finished();
                    self.viewport.pinch_update(scale);
                    self.viewport.pinch_release();
                }
            }
        }
    }

    // --- Queries (read by the renderer and host) ---

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        self.history.strokes()
    }

    /// The stroke currently being captured, if any.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.tools.current()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn active_tool(&self) -> ToolKind {
        self.tools.active_tool()
    }

    pub fn background_image(&self) -> Option<&str> {
        self.background_image.as_deref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mode(&self) -> InteractionMode {
        self.arbiter.mode()
    }
}
