//! Gesture lifecycle events delivered by the host.
//!
//! The host platform owns gesture recognition and feeds the engine a strict
//! per-gesture sequence: `Began`, zero or more `Changed`, then `Ended` or
//! `Cancelled`. Pan and pinch updates may interleave with each other but
//! never with draw updates for the same interaction.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Began,
    Changed,
    /// The gesture completed normally.
    Ended,
    /// The gesture was finalized by the system (interruption, takeover).
    /// Always handled as "abandon, do not commit".
    Cancelled,
}

/// A recognized gesture event, one of the three supported families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// Single-pointer drag: draws a stroke.
    /// `position` is the pointer location in screen space.
    Draw {
        phase: GesturePhase,
        position: Point,
    },
    /// Two-pointer drag: pans the viewport.
    /// `translation` is cumulative since the gesture began, in screen units.
    Pan {
        phase: GesturePhase,
        translation: Vec2,
    },
    /// Two-pointer pinch: zooms the viewport.
    /// `scale` is the cumulative factor since the gesture began.
    Pinch { phase: GesturePhase, scale: f64 },
}
