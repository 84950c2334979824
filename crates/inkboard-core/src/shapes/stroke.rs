//! Freehand stroke.

use super::{ItemId, Rgba8};
use crate::geometry::{self, manhattan};
use kurbo::{Point, Rect, Vec2};
use uuid::Uuid;

/// Minimum Manhattan distance a new point must be from the previous one
/// before it is recorded.
pub const MIN_POINT_SPACING: f64 = 1.0;

/// A freehand polyline with uniform color and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub(crate) id: ItemId,
    /// Points in drawing order.
    pub points: Vec<Point>,
    pub color: Rgba8,
    /// Pen width, at least 1.
    pub width: f64,
}

impl Stroke {
    /// Start a stroke at `origin`.
    pub fn new(origin: Point, color: Rgba8, width: f64) -> Self {
        Self::from_points(vec![origin], color, width)
    }

    pub fn from_points(points: Vec<Point>, color: Rgba8, width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            color,
            width: width.max(1.0),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Append `point` unless it is within [`MIN_POINT_SPACING`] of the last
    /// recorded point. Returns whether the point was kept.
    pub fn extend_to(&mut self, point: Point) -> bool {
        match self.points.last() {
            Some(last) if manhattan(*last, point) <= MIN_POINT_SPACING => false,
            _ => {
                self.points.push(point);
                true
            }
        }
    }

    /// Check whether `point` is within `threshold + width` of a recorded point.
    pub fn is_near(&self, point: Point, threshold: f64) -> bool {
        geometry::near_any_vertex(point, &self.points, threshold + self.width)
    }

    /// Check whether any recorded point lies inside `rect` (inclusive).
    pub fn has_point_in(&self, rect: Rect) -> bool {
        self.points.iter().any(|p| geometry::rect_contains(rect, *p))
    }

    pub fn translate(&mut self, delta: Vec2) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    /// Bounds of the recorded points (stroke width not included).
    pub fn bounds(&self) -> Option<Rect> {
        geometry::points_bounds(&self.points)
    }
}
