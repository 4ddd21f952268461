//! Tool policy and in-progress stroke capture.

use crate::stroke::{Stroke, StrokeColor, StrokeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Pen,
    Highlighter,
    Eraser,
}

impl ToolKind {
    /// The fixed style policy for each tool. Invariant for the lifetime of
    /// the engine: the pen draws thin opaque black, the highlighter wide
    /// half-transparent yellow, the eraser paints the background color.
    pub fn style(self) -> StrokeStyle {
        match self {
            ToolKind::Pen => StrokeStyle {
                color: StrokeColor::black(),
                width: 2.0,
            },
            ToolKind::Highlighter => StrokeStyle {
                color: StrokeColor::new(255, 255, 0, 128),
                width: 20.0,
            },
            ToolKind::Eraser => StrokeStyle {
                color: StrokeColor::white(),
                width: 30.0,
            },
        }
    }
}

/// Owns the active tool and the stroke currently being captured.
///
/// Capture is a three-step lifecycle: `begin` creates the stroke with the
/// active tool's style and one initial point, `append` grows it one sampled
/// point at a time, and `finish`/`cancel` end it. Every reported movement
/// sample becomes a point; there is no deduplication or simplification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolManager {
    active_tool: ToolKind,
    current: Option<Stroke>,
}

impl ToolManager {
    /// Create a new tool manager with the default tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tool new strokes will be drawn with.
    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    /// Select a tool. Takes effect on the next `begin` only; a stroke
    /// already in progress keeps the style captured at its start.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.active_tool = tool;
    }

    /// Start capturing a stroke at `point` (logical canvas space).
    ///
    /// Any stroke still in progress is discarded first; the caller is
    /// expected to have finished or cancelled it already.
    pub fn begin(&mut self, point: Point) {
        log::trace!("stroke capture begin with {:?}", self.active_tool);
        self.current = Some(Stroke::new(self.active_tool, point));
    }

    /// Append one sampled point to the in-progress stroke. No-op when no
    /// stroke is being captured.
    pub fn append(&mut self, point: Point) {
        if let Some(stroke) = &mut self.current {
            stroke.add_point(point);
        }
    }

    /// End the capture, returning the stroke for committing.
    ///
    /// Returns `None` when no stroke was in progress or the stroke ended up
    /// with zero points; such strokes are silently dropped, never committed.
    pub fn finish(&mut self) -> Option<Stroke> {
        let stroke = self.current.take()?;
        if stroke.is_empty() {
            return None;
        }
        Some(stroke)
    }

    /// Abandon the in-progress stroke without committing it.
    pub fn cancel(&mut self) {
        if self.current.take().is_some() {
            log::trace!("stroke capture cancelled");
        }
    }

    /// Check if a stroke is currently being captured.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// The stroke currently being captured, if any.
    pub fn current(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_policy() {
        let pen = ToolKind::Pen.style();
        assert_eq!(pen.color, StrokeColor::black());
        assert!((pen.width - 2.0).abs() < f64::EPSILON);

        let highlighter = ToolKind::Highlighter.style();
        assert_eq!(highlighter.color.a, 128);
        assert!((highlighter.width - 20.0).abs() < f64::EPSILON);

        let eraser = ToolKind::Eraser.style();
        assert_eq!(eraser.color, StrokeColor::white());
        assert!((eraser.width - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_capture_lifecycle() {
        let mut tm = ToolManager::new();
        assert!(!tm.is_active());

        tm.begin(Point::new(0.0, 0.0));
        assert!(tm.is_active());

        tm.append(Point::new(5.0, 5.0));
        tm.append(Point::new(10.0, 10.0));
        assert_eq!(tm.current().unwrap().len(), 3);

        let stroke = tm.finish().unwrap();
        assert_eq!(stroke.len(), 3);
        assert!(!tm.is_active());
    }

    #[test]
    fn test_cancel_discards_stroke() {
        let mut tm = ToolManager::new();
        tm.begin(Point::new(0.0, 0.0));
        tm.append(Point::new(5.0, 5.0));

        tm.cancel();
        assert!(!tm.is_active());
        assert!(tm.finish().is_none());
    }

    #[test]
    fn test_finish_without_begin() {
        let mut tm = ToolManager::new();
        assert!(tm.finish().is_none());
    }

    #[test]
    fn test_append_without_begin_is_noop() {
        let mut tm = ToolManager::new();
        tm.append(Point::new(5.0, 5.0));
        assert!(!tm.is_active());
    }

    #[test]
    fn test_tool_change_does_not_restyle_current_stroke() {
        let mut tm = ToolManager::new();
        tm.begin(Point::new(0.0, 0.0));

        tm.set_tool(ToolKind::Highlighter);
        assert_eq!(tm.current().unwrap().tool, ToolKind::Pen);
        assert_eq!(tm.current().unwrap().style, ToolKind::Pen.style());

        let stroke = tm.finish().unwrap();
        assert_eq!(stroke.style, ToolKind::Pen.style());

        // Only strokes started afterward pick up the new tool.
        tm.begin(Point::new(1.0, 1.0));
        assert_eq!(tm.current().unwrap().tool, ToolKind::Highlighter);
    }
}
