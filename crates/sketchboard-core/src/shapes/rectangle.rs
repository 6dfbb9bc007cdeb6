//! Rectangle shape.

use super::{Renderable, ShapeId, ShapeTrait};
use crate::geometry::normalized_bounds;
use kurbo::{Point, Rect, Shape as KurboShape};

/// An axis-aligned rectangle spanned by two corners.
///
/// The corners are stored as drawn: `start` is the anchor corner where the
/// drag began and need not be the minimum corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    id: ShapeId,
    start: Point,
    end: Point,
    renderable: Renderable,
}

impl Rectangle {
    /// Create a rectangle from two corner points.
    pub fn new(id: ShapeId, start: Point, end: Point) -> Self {
        let rect = normalized_bounds(start, end);
        Self {
            id,
            start,
            end,
            renderable: Renderable::new(rect.to_path(0.1), rect),
        }
    }
}

impl ShapeTrait for Rectangle {
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
