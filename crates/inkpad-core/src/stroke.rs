//! Stroke data model: an ordered run of points plus a fixed style.

use crate::tools::ToolKind;
use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type StrokeId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl StrokeColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for StrokeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<StrokeColor> for Color {
    fn from(color: StrokeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for a stroke, fixed at capture start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: StrokeColor,
    /// Stroke width in logical canvas units.
    pub width: f64,
}

impl StrokeStyle {
    /// Get the stroke color as a peniko Color.
    pub fn brush(&self) -> Color {
        self.color.into()
    }
}

/// One continuous drawn line from gesture start to gesture end.
///
/// Points are in logical canvas space and append-only while the stroke is
/// being captured; a stroke committed to history is never mutated again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    /// Tool the stroke was drawn with.
    pub tool: ToolKind,
    /// Style captured from the tool at stroke start.
    pub style: StrokeStyle,
    /// Points in the stroke path.
    pub points: Vec<Point>,
}

impl Stroke {
    /// Create a new stroke with a single initial point.
    pub fn new(tool: ToolKind, first: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            tool,
            style: tool.style(),
            points: vec![first],
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounding box of the path.
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Convert to an open polyline path: move-to the first point, line-to
    /// each subsequent one. No closing segment, no fill.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        if self.points.is_empty() {
            return path;
        }

        path.move_to(self.points[0]);
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stroke_has_initial_point() {
        let stroke = Stroke::new(ToolKind::Pen, Point::new(3.0, 4.0));
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.points[0], Point::new(3.0, 4.0));
    }

    #[test]
    fn test_add_points() {
        let mut stroke = Stroke::new(ToolKind::Pen, Point::new(0.0, 0.0));
        stroke.add_point(Point::new(10.0, 10.0));
        stroke.add_point(Point::new(20.0, 5.0));
        assert_eq!(stroke.len(), 3);
    }

    #[test]
    fn test_bounds() {
        let mut stroke = Stroke::new(ToolKind::Pen, Point::new(0.0, 0.0));
        stroke.add_point(Point::new(100.0, 50.0));
        stroke.add_point(Point::new(50.0, 100.0));

        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_path_is_open_polyline() {
        use kurbo::PathEl;

        let mut stroke = Stroke::new(ToolKind::Pen, Point::new(0.0, 0.0));
        stroke.add_point(Point::new(10.0, 0.0));
        stroke.add_point(Point::new(10.0, 10.0));

        let elements: Vec<PathEl> = stroke.to_path().into_iter().collect();
        assert_eq!(elements.len(), 3);
        assert!(matches!(elements[0], PathEl::MoveTo(_)));
        assert!(matches!(elements[1], PathEl::LineTo(_)));
        assert!(matches!(elements[2], PathEl::LineTo(_)));
        assert!(!elements.iter().any(|e| matches!(e, PathEl::ClosePath)));
    }

    #[test]
    fn test_color_roundtrip() {
        let color = StrokeColor::new(255, 255, 0, 128);
        let peniko: Color = color.into();
        let back: StrokeColor = peniko.into();
        assert_eq!(color, back);
    }

    #[test]
    fn test_style_captured_from_tool() {
        let stroke = Stroke::new(ToolKind::Highlighter, Point::new(0.0, 0.0));
        assert_eq!(stroke.style, ToolKind::Highlighter.style());
    }
}
