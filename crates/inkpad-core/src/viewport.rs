//! Viewport transform between screen space and logical canvas space.
//!
//! The transform is a (scale, translate) pair with two layers: the committed
//! values that persist between gestures, and a transient in-gesture overlay
//! (a pinch scale factor, a pan translation delta) applied on top while a
//! gesture is live. Conversion always reads the composed current values, so
//! points recorded mid-stroke stay anchored to the finger even while the
//! view is moving.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed zoom level.
pub const MIN_ZOOM: f64 = 0.5;
/// Maximum allowed zoom level.
pub const MAX_ZOOM: f64 = 3.0;

/// How long the post-pan settle animation runs, in seconds.
const SETTLE_DURATION: f64 = 0.25;

/// Decaying display offset applied after a pan release that ended out of
/// bounds. Purely presentational: the committed translation is already
/// clamped when the settle starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Settle {
    offset: Vec2,
    elapsed: f64,
    duration: f64,
}

impl Settle {
    /// Remaining offset at the current playhead, ease-out cubic.
    fn current(&self) -> Vec2 {
        let u = (self.elapsed / self.duration).clamp(0.0, 1.0);
        let remaining = (1.0 - u).powi(3);
        self.offset * remaining
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// The view transform for the drawing surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    /// Committed zoom level.
    scale: f64,
    /// Committed translation in screen units.
    translate: Vec2,
    /// Transient pinch factor, 1.0 outside a pinch gesture.
    gesture_scale: f64,
    /// Transient pan delta, zero outside a pan gesture.
    gesture_translate: Vec2,
    /// Fixed logical canvas bounds, set once at construction.
    canvas_size: Size,
    /// Canvas origin offset in screen space; `None` until the host reports
    /// its layout measurement.
    origin: Option<Point>,
    /// Post-pan settle animation, if one is running.
    settle: Option<Settle>,
}

impl Viewport {
    /// Create a viewport over a logical canvas of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
            gesture_scale: 1.0,
            gesture_translate: Vec2::ZERO,
            canvas_size: Size::new(width, height),
            origin: None,
            settle: None,
        }
    }

    /// The fixed logical canvas size.
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Record where the canvas sits in screen space. Until this is called,
    /// coordinate conversion degrades to the identity mapping.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = Some(origin);
    }

    /// The effective zoom level, committed value composed with any live
    /// pinch factor, always clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn current_scale(&self) -> f64 {
        (self.scale * self.gesture_scale).clamp(MIN_ZOOM, MAX_ZOOM)
    }

    /// The effective translation: committed value, any live pan delta, and
    /// the remaining settle offset.
    pub fn current_translate(&self) -> Vec2 {
        let settle = self.settle.as_ref().map_or(Vec2::ZERO, Settle::current);
        self.translate + self.gesture_translate + settle
    }

    /// Committed zoom level (post-gesture).
    pub fn committed_scale(&self) -> f64 {
        self.scale
    }

    /// Committed translation (post-gesture).
    pub fn committed_translate(&self) -> Vec2 {
        self.translate
    }

    /// The canvas-to-screen transform for the host renderer.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.current_translate()) * Affine::scale(self.current_scale())
    }

    /// Convert a screen-space point to logical canvas space, clamped to the
    /// canvas bounds.
    ///
    /// If the canvas origin has not been measured yet, the raw input is
    /// returned unchanged so drawing degrades gracefully instead of erroring.
    pub fn screen_to_canvas(&self, point: Point) -> Point {
        let Some(origin) = self.origin else {
            return point;
        };
        let translate = self.current_translate();
        let scale = self.current_scale();
        Point::new(
            ((point.x - origin.x - translate.x) / scale).clamp(0.0, self.canvas_size.width),
            ((point.y - origin.y - translate.y) / scale).clamp(0.0, self.canvas_size.height),
        )
    }

    /// Convert a logical canvas point back to screen space (hit testing).
    /// Identity until the canvas origin is known, mirroring `screen_to_canvas`.
    pub fn canvas_to_screen(&self, point: Point) -> Point {
        let Some(origin) = self.origin else {
            return point;
        };
        let translate = self.current_translate();
        let scale = self.current_scale();
        Point::new(
            point.x * scale + translate.x + origin.x,
            point.y * scale + translate.y + origin.y,
        )
    }

    /// The canvas-space rectangle currently visible in the viewport.
    pub fn visible_rect(&self) -> Rect {
        let translate = self.current_translate();
        let scale = self.current_scale();
        Rect::new(
            (0.0 - translate.x) / scale,
            (0.0 - translate.y) / scale,
            (self.canvas_size.width - translate.x) / scale,
            (self.canvas_size.height - translate.y) / scale,
        )
    }

    // --- Pan gesture lifecycle ---

    /// A pan gesture began. Freezes any running settle at its current
    /// position so the user can grab the view mid-animation.
    pub fn pan_begin(&mut self) {
        if let Some(settle) = self.settle.take() {
            self.translate += settle.current();
        }
        self.gesture_translate = Vec2::ZERO;
    }

    /// Update the live pan with the cumulative translation since the gesture
    /// began. Unclamped: bounds are only enforced at release.
    pub fn pan_update(&mut self, translation: Vec2) {
        self.gesture_translate = translation;
    }

    /// A pan gesture ended. Commits the translation, clamped so the canvas
    /// cannot leave the screen, and starts a settle animation covering the
    /// difference when the gesture ended out of bounds.
    pub fn pan_release(&mut self) {
        let raw = self.translate + self.gesture_translate;
        self.gesture_translate = Vec2::ZERO;

        let clamped = self.clamp_translation(raw);
        self.translate = clamped;

        let overshoot = raw - clamped;
        if overshoot.hypot() > f64::EPSILON {
            log::debug!(
                "pan released {:.1} screen units out of bounds, settling",
                overshoot.hypot()
            );
            self.settle = Some(Settle {
                offset: overshoot,
                elapsed: 0.0,
                duration: SETTLE_DURATION,
            });
        }
    }

    // --- Pinch gesture lifecycle ---

    /// A pinch gesture began.
    pub fn pinch_begin(&mut self) {
        self.gesture_scale = 1.0;
    }

    /// Update the live pinch with the cumulative scale factor since the
    /// gesture began. The effective scale stays clamped throughout.
    pub fn pinch_update(&mut self, factor: f64) {
        self.gesture_scale = factor;
    }

    /// A pinch gesture ended. Commits the clamped effective scale.
    pub fn pinch_release(&mut self) {
        let committed = self.current_scale();
        if (committed - self.scale * self.gesture_scale).abs() > f64::EPSILON {
            log::debug!("pinch clamped to {committed:.2}");
        }
        self.scale = committed;
        self.gesture_scale = 1.0;
    }

    // --- Settle animation ---

    /// Advance the settle animation by `dt` seconds. No-op when idle.
    pub fn tick(&mut self, dt: f64) {
        if let Some(settle) = &mut self.settle {
            settle.elapsed += dt;
            if settle.finished() {
                self.settle = None;
            }
        }
    }

    /// Whether a settle animation is still running.
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Clamp a translation so the canvas cannot pan fully off-screen. The
    /// allowance grows with zoom: at scale ≤ 1 the canvas stays put, at
    /// higher zoom each axis may move up to `size · (scale − 1) / 2`.
    fn clamp_translation(&self, translation: Vec2) -> Vec2 {
        let scale = self.current_scale();
        let max_x = (self.canvas_size.width * (scale - 1.0) / 2.0).max(0.0);
        let max_y = (self.canvas_size.height * (scale - 1.0) / 2.0).max(0.0);
        Vec2::new(
            translation.x.clamp(-max_x, max_x),
            translation.y.clamp(-max_y, max_y),
        )
    }
}
