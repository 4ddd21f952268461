//! Gesture arbitration: one explicit interaction mode at a time.
//!
//! Incoming gesture lifecycle events are classified into three families:
//! single-pointer draw, two-pointer pan, and two-pointer pinch. Pan and
//! pinch compose (a user can pan while pinching); draw is mutually exclusive
//! with both. Encoding the combinations as a tagged mode makes the priority
//! rules checkable on every event rather than guarded by scattered flags.

use serde::{Deserialize, Serialize};

/// The single active interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Drawing,
    Panning,
    Pinching,
    PanningAndPinching,
}

impl InteractionMode {
    /// Whether a draw gesture owns the interaction.
    pub fn is_drawing(self) -> bool {
        matches!(self, InteractionMode::Drawing)
    }

    /// Whether a pan gesture is active (alone or composed with a pinch).
    pub fn is_panning(self) -> bool {
        matches!(
            self,
            InteractionMode::Panning | InteractionMode::PanningAndPinching
        )
    }

    /// Whether a pinch gesture is active (alone or composed with a pan).
    pub fn is_pinching(self) -> bool {
        matches!(
            self,
            InteractionMode::Pinching | InteractionMode::PanningAndPinching
        )
    }
}

/// Outcome of offering a gesture start to the arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The gesture was accepted and the mode updated.
    Accepted,
    /// The gesture was accepted by taking over from an in-progress draw;
    /// the caller must discard the current stroke.
    AcceptedCancellingDraw,
    /// The event does not apply in the current mode and must be ignored.
    Ignored,
}

/// Routes gesture lifecycle events into exactly one interaction mode.
///
/// Race resolution is deterministic: when a two-pointer gesture begins while
/// a draw is in progress, the two-pointer gesture wins and the draw is
/// cancelled. Draw events arriving in any other mode are suppressed, which
/// also covers a draw gesture's trailing end event after a takeover.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureArbiter {
    mode: InteractionMode,
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_drawing(&self) -> bool {
        self.mode.is_drawing()
    }

    pub fn is_panning(&self) -> bool {
        self.mode.is_panning()
    }

    pub fn is_pinching(&self) -> bool {
        self.mode.is_pinching()
    }

    /// Offer a draw-gesture start. Accepted only from `Idle`: a draw can
    /// never begin while any other gesture holds the interaction.
    pub fn draw_began(&mut self) -> StartOutcome {
        match self.mode {
            InteractionMode::Idle => {
                self.set_mode(InteractionMode::Drawing);
                StartOutcome::Accepted
            }
            _ => StartOutcome::Ignored,
        }
    }

    /// A draw gesture ended or was cancelled while it owned the interaction.
    pub fn draw_finished(&mut self) {
        if self.mode.is_drawing() {
            self.set_mode(InteractionMode::Idle);
        }
    }

    /// Offer a pan-gesture start.
    pub fn pan_began(&mut self) -> StartOutcome {
        match self.mode {
            InteractionMode::Idle => {
                self.set_mode(InteractionMode::Panning);
                StartOutcome::Accepted
            }
            InteractionMode::Drawing => {
                self.set_mode(InteractionMode::Panning);
                StartOutcome::AcceptedCancellingDraw
            }
            InteractionMode::Pinching => {
                self.set_mode(InteractionMode::PanningAndPinching);
                StartOutcome::Accepted
            }
            // Duplicate begin from the host recognizer.
            InteractionMode::Panning | InteractionMode::PanningAndPinching => {
                StartOutcome::Ignored
            }
        }
    }

    /// A pan gesture ended or was cancelled.
    pub fn pan_finished(&mut self) {
        match self.mode {
            InteractionMode::Panning => self.set_mode(InteractionMode::Idle),
            InteractionMode::PanningAndPinching => self.set_mode(InteractionMode::Pinching),
            _ => {}
        }
    }

    /// Offer a pinch-gesture start.
    pub fn pinch_began(&mut self) -> StartOutcome {
        match self.mode {
            InteractionMode::Idle => {
                self.set_mode(InteractionMode::Pinching);
                StartOutcome::Accepted
            }
            InteractionMode::Drawing => {
                self.set_mode(InteractionMode::Pinching);
                StartOutcome::AcceptedCancellingDraw
            }
            InteractionMode::Panning => {
                self.set_mode(InteractionMode::PanningAndPinching);
                StartOutcome::Accepted
            }
            InteractionMode::Pinching | InteractionMode::PanningAndPinching => {
                StartOutcome::Ignored
            }
        }
    }

    /// A pinch gesture ended or was cancelled.
    pub fn pinch_finished(&mut self) {
        match self.mode {
            InteractionMode::Pinching => self.set_mode(InteractionMode::Idle),
            InteractionMode::PanningAndPinching => self.set_mode(InteractionMode::Panning),
            _ => {}
        }
    }

    fn set_mode(&mut self, mode: InteractionMode) {
        log::trace!("interaction mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_from_idle() {
        let mut arbiter = GestureArbiter::new();
        assert_eq!(arbiter.draw_began(), StartOutcome::Accepted);
        assert!(arbiter.is_drawing());

        arbiter.draw_finished();
        assert_eq!(arbiter.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_draw_suppressed_while_pinching() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pinch_began();

        assert_eq!(arbiter.draw_began(), StartOutcome::Ignored);
        assert_eq!(arbiter.mode(), InteractionMode::Pinching);
    }

    #[test]
    fn test_pinch_takes_over_draw() {
        let mut arbiter = GestureArbiter::new();
        arbiter.draw_began();

        assert_eq!(arbiter.pinch_began(), StartOutcome::AcceptedCancellingDraw);
        assert!(arbiter.is_pinching());
        assert!(!arbiter.is_drawing());
    }

    #[test]
    fn test_pan_takes_over_draw() {
        let mut arbiter = GestureArbiter::new();
        arbiter.draw_began();

        assert_eq!(arbiter.pan_began(), StartOutcome::AcceptedCancellingDraw);
        assert!(arbiter.is_panning());
    }

    #[test]
    fn test_pan_and_pinch_compose() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pan_began();
        arbiter.pinch_began();
        assert_eq!(arbiter.mode(), InteractionMode::PanningAndPinching);
        assert!(arbiter.is_panning());
        assert!(arbiter.is_pinching());

        // Ending one leaves the other active.
        arbiter.pan_finished();
        assert_eq!(arbiter.mode(), InteractionMode::Pinching);
        arbiter.pinch_finished();
        assert_eq!(arbiter.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_compose_in_either_order() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pinch_began();
        arbiter.pan_began();
        assert_eq!(arbiter.mode(), InteractionMode::PanningAndPinching);

        arbiter.pinch_finished();
        assert_eq!(arbiter.mode(), InteractionMode::Panning);
    }

    #[test]
    fn test_duplicate_begins_ignored() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pan_began();
        assert_eq!(arbiter.pan_began(), StartOutcome::Ignored);
        arbiter.pinch_began();
        assert_eq!(arbiter.pinch_began(), StartOutcome::Ignored);
        assert_eq!(arbiter.mode(), InteractionMode::PanningAndPinching);
    }

    #[test]
    fn test_draw_finish_outside_drawing_is_noop() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pinch_began();
        arbiter.draw_finished();
        assert_eq!(arbiter.mode(), InteractionMode::Pinching);
    }

    #[test]
    fn test_stray_finishes_are_noops() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pan_finished();
        arbiter.pinch_finished();
        assert_eq!(arbiter.mode(), InteractionMode::Idle);

        arbiter.draw_began();
        arbiter.pan_finished();
        assert!(arbiter.is_drawing());
    }
}
