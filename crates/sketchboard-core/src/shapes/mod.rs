//! Shape definitions for the whiteboard.

mod line;
mod rectangle;

pub use line::Line;
pub use rectangle::Rectangle;

use crate::geometry;
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for shapes: the shape's index in the scene at creation time.
pub type ShapeId = usize;

/// The kinds of shape the drawing tools can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Rectangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Line => f.write_str("line"),
            ShapeKind::Rectangle => f.write_str("rectangle"),
        }
    }
}

/// Render-ready geometry derived from a shape's coordinates.
///
/// Only built by the shape constructors, so it never drifts from the
/// coordinates it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderable {
    path: BezPath,
    bounds: Rect,
}

impl Renderable {
    fn new(path: BezPath, bounds: Rect) -> Self {
        Self { path, bounds }
    }

    /// Outline path to stroke.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Axis-aligned bounds of the outline.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The outline as SVG path data.
    pub fn to_svg(&self) -> String {
        self.path.to_svg()
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the identifier.
    fn id(&self) -> ShapeId;

    /// First defining point (anchor corner or line start).
    fn start(&self) -> Point;

    /// Second defining point (far corner or line end).
    fn end(&self) -> Point;

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;

    /// Get the render-ready geometry.
    fn renderable(&self) -> &Renderable;
}

/// A drawable shape.
///
/// (De)serializes as a flat `{id, kind, x1, y1, x2, y2}` record; the
/// renderable is rebuilt on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ShapeRecord", from = "ShapeRecord")]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
}

/// Build a shape from its id, two corner coordinates and kind.
///
/// This is the construction path for every shape; coordinates are never
/// patched in place.
pub fn create_shape(id: ShapeId, x1: f64, y1: f64, x2: f64, y2: f64, kind: ShapeKind) -> Shape {
    Shape::new(id, Point::new(x1, y1), Point::new(x2, y2), kind)
}

impl Shape {
    pub fn new(id: ShapeId, start: Point, end: Point, kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Line => Shape::Line(Line::new(id, start, end)),
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::new(id, start, end)),
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    pub fn start(&self) -> Point {
        match self {
            Shape::Line(s) => s.start(),
            Shape::Rectangle(s) => s.start(),
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Shape::Line(s) => s.end(),
            Shape::Rectangle(s) => s.end(),
        }
    }

    /// The raw `(x1, y1, x2, y2)` coordinates.
    pub fn coords(&self) -> (f64, f64, f64, f64) {
        let (start, end) = (self.start(), self.end());
        (start.x, start.y, end.x, end.y)
    }

    /// Signed extent from the anchor corner to the far corner.
    pub fn extent(&self) -> Vec2 {
        self.end() - self.start()
    }

    /// Signed width (`x2 - x1`).
    pub fn width(&self) -> f64 {
        self.extent().x
    }

    /// Signed height (`y2 - y1`).
    pub fn height(&self) -> f64 {
        self.extent().y
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
        }
    }

    pub fn renderable(&self) -> &Renderable {
        match self {
            Shape::Line(s) => s.renderable(),
            Shape::Rectangle(s) => s.renderable(),
        }
    }

    /// Check if canvas coordinates `(x, y)` hit this shape.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        geometry::contains_point(self, x, y)
    }

    /// Rebuild with the far corner moved to `end`.
    pub fn with_end(&self, end: Point) -> Self {
        Self::new(self.id(), self.start(), end, self.kind())
    }

    /// Rebuild with the anchor corner at `anchor`, keeping width and height.
    pub fn translated_to(&self, anchor: Point) -> Self {
        Self::new(self.id(), anchor, anchor + self.extent(), self.kind())
    }
}

/// Flat serialized form of a shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ShapeRecord {
    id: ShapeId,
    kind: ShapeKind,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl From<Shape> for ShapeRecord {
    fn from(shape: Shape) -> Self {
        let (x1, y1, x2, y2) = shape.coords();
        Self {
            id: shape.id(),
            kind: shape.kind(),
            x1,
            y1,
            x2,
            y2,
        }
    }
}

impl From<ShapeRecord> for Shape {
    fn from(record: ShapeRecord) -> Self {
        create_shape(record.id, record.x1, record.y1, record.x2, record.y2, record.kind)
    }
}
