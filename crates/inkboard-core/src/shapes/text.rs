//! Text label.

use super::{ItemId, Rgba8};
use crate::geometry;
use crate::metrics::{FontMetrics, FontSpec};
use kurbo::{Point, Rect, Vec2};
use uuid::Uuid;

/// A single-line text label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub(crate) id: ItemId,
    pub text: String,
    /// Baseline-left anchor.
    pub anchor: Point,
    pub color: Rgba8,
    pub font_size: f64,
    /// Family used for measuring and drawing.
    pub font_family: String,
}

impl TextItem {
    pub fn new(text: impl Into<String>, anchor: Point, color: Rgba8, font: &FontSpec) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            anchor,
            color,
            font_size: font.size,
            font_family: font.family.clone(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), self.font_size)
    }

    /// Measured bounding box.
    ///
    /// The measured extent is placed with its top-left at the anchor and then
    /// raised by the font ascent, so the anchor acts as the baseline-left
    /// corner.
    pub fn bounds(&self, metrics: &dyn FontMetrics) -> Rect {
        let m = metrics.measure(&self.font(), &self.text);
        let top = self.anchor.y - m.ascent;
        Rect::new(self.anchor.x, top, self.anchor.x + m.width, top + m.height)
    }

    /// Inclusive point-in-bounds test.
    pub fn contains(&self, point: Point, metrics: &dyn FontMetrics) -> bool {
        geometry::rect_contains(self.bounds(metrics), point)
    }

    pub fn intersects(&self, rect: Rect, metrics: &dyn FontMetrics) -> bool {
        geometry::rects_intersect(self.bounds(metrics), rect)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.anchor += delta;
    }
}
