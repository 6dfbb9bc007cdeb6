//! Line shape.

use super::{Renderable, ShapeId, ShapeTrait};
use crate::geometry::normalized_bounds;
use kurbo::{BezPath, Point, Rect};

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: ShapeId,
    start: Point,
    end: Point,
    renderable: Renderable,
}

impl Line {
    /// Create a new line.
    pub fn new(id: ShapeId, start: Point, end: Point) -> Self {
        Self {
            id,
            start,
            end,
            renderable: Self::build_renderable(start, end),
        }
    }

    fn build_renderable(start: Point, end: Point) -> Renderable {
        let mut path = BezPath::new();
        // A zero-length line has nothing to stroke.
        if start != end {
            path.move_to(start);
            path.line_to(end);
        }
        Renderable::new(path, normalized_bounds(start, end))
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn bounds(&self) -> Rect {
        self.renderable.bounds()
    }

    fn renderable(&self) -> &Renderable {
        &self.renderable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_creation() {
        let line = Line::new(4, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(line.id(), 4);
        assert_eq!(line.start(), Point::new(0.0, 0.0));
        assert_eq!(line.end(), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_bounds() {
        let line = Line::new(0, Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        let bounds = line.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_length_renderable_is_empty() {
        let line = Line::new(0, Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert!(line.renderable().path().elements().is_empty());

        let line = Line::new(0, Point::new(5.0, 5.0), Point::new(6.0, 5.0));
        assert_eq!(line.renderable().path().elements().len(), 2);
    }
}
