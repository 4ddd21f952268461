//! Committed-stroke history with undo/redo stacks.

use crate::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// The committed stroke sequence plus the redo buffer.
///
/// The committed order is append-only except for `undo` (pop from the tail)
/// and `redo` (push back onto the tail). Strokes are immutable once
/// committed, so the stacks move whole values and `undo` followed by `redo`
/// restores the exact stroke that was removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
    redo_stack: Vec<Stroke>,
}

impl StrokeHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a finished stroke.
    ///
    /// Any new drawing action invalidates the redo buffer; undone strokes
    /// are permanently lost once something new is committed.
    pub fn commit(&mut self, stroke: Stroke) {
        log::debug!(
            "committing stroke {} ({} points), {} redoable dropped",
            stroke.id(),
            stroke.len(),
            self.redo_stack.len()
        );
        self.redo_stack.clear();
        self.strokes.push(stroke);
    }

    /// Remove the most recent stroke, keeping it redoable.
    /// Returns `false` (no-op, not an error) when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.strokes.pop() {
            Some(stroke) => {
                self.redo_stack.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Restore the most recently undone stroke.
    /// Returns `false` (no-op, not an error) when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(stroke) => {
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Committed strokes in commit order (oldest first).
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of committed strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Check if there are no committed strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
