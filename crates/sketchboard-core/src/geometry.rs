//! Distance and containment math used for hit-testing.

use crate::shapes::{Shape, ShapeTrait};
use kurbo::{Point, Rect, Vec2};

/// Tolerance in canvas units for a point to count as lying on a line.
pub const LINE_HIT_EPSILON: f64 = 1.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Normalize two arbitrary corners into a rectangle with `x0 <= x1` and `y0 <= y1`.
pub fn normalized_bounds(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

/// Inclusive containment: points on the edges count as inside.
///
/// `kurbo::Rect::contains` is half-open, which would make the right and
/// bottom edges miss.
pub fn rect_contains(rect: Rect, point: Point) -> bool {
    rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    distance(point, proj)
}

/// Whether `point` lies on the segment a→b.
///
/// The point must satisfy the triangle-equality test
/// `|ab - (ap + bp)| < LINE_HIT_EPSILON`, which rejects points past either
/// endpoint, and must also sit strictly closer than `LINE_HIT_EPSILON` to the
/// segment itself. On long segments the triangle test alone admits points
/// several units off the line.
pub fn segment_contains(a: Point, b: Point, point: Point) -> bool {
    let offset = distance(a, b) - (distance(a, point) + distance(b, point));
    offset.abs() < LINE_HIT_EPSILON && point_to_segment_dist(point, a, b) < LINE_HIT_EPSILON
}

/// Hit test a shape at canvas coordinates `(x, y)`.
///
/// Rectangles hit anywhere inside their normalized bounding box, edges
/// included. Lines hit on the segment within [`LINE_HIT_EPSILON`].
pub fn contains_point(shape: &Shape, x: f64, y: f64) -> bool {
    let point = Point::new(x, y);
    match shape {
        Shape::Rectangle(rect) => rect_contains(normalized_bounds(rect.start(), rect.end()), point),
        Shape::Line(line) => segment_contains(line.start(), line.end(), point),
    }
}
