//! Selection sets, selection bounds and drag hit-testing.

use crate::geometry;
use crate::metrics::FontMetrics;
use crate::scene::Scene;
use crate::shapes::ItemId;
use kurbo::{Point, Rect};

/// Proximity threshold (added to the stroke width) for grabbing a selected
/// stroke to drag it.
pub const DRAG_HIT_THRESHOLD: f64 = 5.0;

/// The selected strokes and texts, by id, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    strokes: Vec<ItemId>,
    texts: Vec<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.texts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strokes.len() + self.texts.len()
    }

    pub fn strokes(&self) -> &[ItemId] {
        &self.strokes
    }

    pub fn texts(&self) -> &[ItemId] {
        &self.texts
    }

    pub fn contains_stroke(&self, id: ItemId) -> bool {
        self.strokes.contains(&id)
    }

    pub fn contains_text(&self, id: ItemId) -> bool {
        self.texts.contains(&id)
    }

    pub fn add_stroke(&mut self, id: ItemId) {
        if !self.strokes.contains(&id) {
            self.strokes.push(id);
        }
    }

    pub fn add_text(&mut self, id: ItemId) {
        if !self.texts.contains(&id) {
            self.texts.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.texts.clear();
    }

    /// Replace the selection with every item hit by the marquee `rect`:
    /// strokes with a point inside it and texts whose bounds intersect it.
    pub fn select_in_rect(&mut self, scene: &Scene, rect: Rect, metrics: &dyn FontMetrics) {
        self.clear();
        for id in scene.strokes_in_rect(rect) {
            self.add_stroke(id);
        }
        for id in scene.texts_in_rect(rect, metrics) {
            self.add_text(id);
        }
    }

    /// Drop ids that no longer exist in `scene`.
    pub fn retain_live(&mut self, scene: &Scene) {
        self.strokes.retain(|&id| scene.contains_stroke(id));
        self.texts.retain(|&id| scene.contains_text(id));
    }

    /// Check whether `point` grabs the current selection: inside a selected
    /// text's bounds, or near a selected stroke.
    pub fn hit_test(&self, scene: &Scene, point: Point, metrics: &dyn FontMetrics) -> bool {
        let on_text = self
            .texts
            .iter()
            .filter_map(|&id| scene.text(id))
            .any(|t| t.contains(point, metrics));
        on_text
            || self
                .strokes
                .iter()
                .filter_map(|&id| scene.stroke(id))
                .any(|s| s.is_near(point, DRAG_HIT_THRESHOLD))
    }

    /// Smallest rectangle covering every selected stroke point and every
    /// selected text's bounds. `None` when nothing live is selected.
    pub fn bounds(&self, scene: &Scene, metrics: &dyn FontMetrics) -> Option<Rect> {
        let mut bounds = None;
        for stroke in self.strokes.iter().filter_map(|&id| scene.stroke(id)) {
            if let Some(b) = stroke.bounds() {
                bounds = geometry::union_opt(bounds, b);
            }
        }
        for text in self.texts.iter().filter_map(|&id| scene.text(id)) {
            bounds = geometry::union_opt(bounds, text.bounds(metrics));
        }
        bounds
    }
}
