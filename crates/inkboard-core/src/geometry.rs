//! Geometry helpers shared by hit-testing, selection and erasing.
//!
//! All comparisons here are inclusive: a point lying exactly on a rectangle
//! edge is inside it, and two rectangles that only touch intersect.

use kurbo::{Point, Rect};

/// Manhattan (taxicab) distance between two points.
pub fn manhattan(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Check whether `point` is within `threshold` (Manhattan) of any of `vertices`.
///
/// Only the recorded vertices are tested, not the segments between them.
pub fn near_any_vertex(point: Point, vertices: &[Point], threshold: f64) -> bool {
    vertices.iter().any(|v| manhattan(*v, point) <= threshold)
}

/// Build a rectangle from two arbitrary corners.
pub fn normalized(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

/// Inclusive point-in-rectangle test.
///
/// `kurbo::Rect::contains` excludes the far edges; marquee and eraser hits
/// must include them.
pub fn rect_contains(rect: Rect, point: Point) -> bool {
    let rect = rect.abs();
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Closed-interval rectangle overlap (touching edges count).
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    let (a, b) = (a.abs(), b.abs());
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Smallest rectangle covering every point, or `None` for an empty set.
pub fn points_bounds<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Rect> {
    let mut iter = points.into_iter();
    let first = *iter.next()?;
    let mut rect = Rect::from_points(first, first);
    for p in iter {
        rect = rect.union_pt(*p);
    }
    Some(rect)
}

/// Union of two optional rectangles.
pub fn union_opt(acc: Option<Rect>, rect: Rect) -> Option<Rect> {
    Some(match acc {
        Some(r) => r.union(rect),
        None => rect,
    })
}
