//! Scene model: the ordered stroke and text collections.

use crate::metrics::FontMetrics;
use crate::shapes::{ItemId, Stroke, TextItem};
use kurbo::{Point, Rect, Vec2};
use std::sync::Arc;

/// The annotations currently on the canvas.
///
/// Items are held behind `Arc` so cloning a scene (taking a history
/// snapshot) only copies pointers. Mutation goes through `Arc::make_mut`,
/// which copies an item the first time it is touched while shared, so a
/// snapshot never observes later edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    strokes: Vec<Arc<Stroke>>,
    texts: Vec<Arc<TextItem>>,
}

/// What an erase pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EraseOutcome {
    pub strokes: usize,
    pub texts: usize,
}

impl EraseOutcome {
    pub fn is_empty(&self) -> bool {
        self.strokes == 0 && self.texts == 0
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.texts.is_empty()
    }

    pub fn strokes(&self) -> impl ExactSizeIterator<Item = &Stroke> + '_ {
        self.strokes.iter().map(|s| s.as_ref())
    }

    pub fn texts(&self) -> impl ExactSizeIterator<Item = &TextItem> + '_ {
        self.texts.iter().map(|t| t.as_ref())
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn text_count(&self) -> usize {
        self.texts.len()
    }

    pub fn add_stroke(&mut self, stroke: Stroke) -> ItemId {
        let id = stroke.id();
        self.strokes.push(Arc::new(stroke));
        id
    }

    pub fn add_text(&mut self, text: TextItem) -> ItemId {
        let id = text.id();
        self.texts.push(Arc::new(text));
        id
    }

    pub fn stroke(&self, id: ItemId) -> Option<&Stroke> {
        self.strokes.iter().find(|s| s.id == id).map(|s| s.as_ref())
    }

    pub fn text(&self, id: ItemId) -> Option<&TextItem> {
        self.texts.iter().find(|t| t.id == id).map(|t| t.as_ref())
    }

    pub fn stroke_mut(&mut self, id: ItemId) -> Option<&mut Stroke> {
        self.strokes
            .iter_mut()
            .find(|s| s.id == id)
            .map(Arc::make_mut)
    }

    pub fn text_mut(&mut self, id: ItemId) -> Option<&mut TextItem> {
        self.texts.iter_mut().find(|t| t.id == id).map(Arc::make_mut)
    }

    pub fn contains_stroke(&self, id: ItemId) -> bool {
        self.stroke(id).is_some()
    }

    pub fn contains_text(&self, id: ItemId) -> bool {
        self.text(id).is_some()
    }

    /// Remove a stroke by id. Missing ids are ignored.
    pub fn remove_stroke(&mut self, id: ItemId) -> Option<Stroke> {
        let pos = self.strokes.iter().position(|s| s.id == id)?;
        Some(Arc::unwrap_or_clone(self.strokes.remove(pos)))
    }

    /// Remove a text by id. Missing ids are ignored.
    pub fn remove_text(&mut self, id: ItemId) -> Option<TextItem> {
        let pos = self.texts.iter().position(|t| t.id == id)?;
        Some(Arc::unwrap_or_clone(self.texts.remove(pos)))
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.texts.clear();
    }

    /// Place the listed items at their position in `base` moved by `delta`.
    /// Ids missing from either scene are skipped.
    pub fn translate_from(&mut self, base: &Scene, stroke_ids: &[ItemId], text_ids: &[ItemId], delta: Vec2) {
        for &id in stroke_ids {
            if let (Some(original), Some(stroke)) = (base.stroke(id), self.stroke_mut(id)) {
                stroke.points.clone_from(&original.points);
                stroke.translate(delta);
            }
        }
        for &id in text_ids {
            if let (Some(original), Some(text)) = (base.text(id), self.text_mut(id)) {
                text.anchor = original.anchor;
                text.translate(delta);
            }
        }
    }

    /// Remove every stroke with a vertex within `radius + width` of `point`
    /// and every text whose bounds contain `point`.
    pub fn erase_at(&mut self, point: Point, radius: f64, metrics: &dyn FontMetrics) -> EraseOutcome {
        let strokes_before = self.strokes.len();
        let texts_before = self.texts.len();
        self.strokes.retain(|s| !s.is_near(point, radius));
        self.texts.retain(|t| !t.contains(point, metrics));
        EraseOutcome {
            strokes: strokes_before - self.strokes.len(),
            texts: texts_before - self.texts.len(),
        }
    }

    /// Ids of strokes with at least one point inside `rect`, in scene order.
    pub fn strokes_in_rect(&self, rect: Rect) -> Vec<ItemId> {
        self.strokes
            .iter()
            .filter(|s| s.has_point_in(rect))
            .map(|s| s.id)
            .collect()
    }

    /// Ids of texts whose bounds intersect `rect`, in scene order.
    pub fn texts_in_rect(&self, rect: Rect, metrics: &dyn FontMetrics) -> Vec<ItemId> {
        self.texts
            .iter()
            .filter(|t| t.intersects(rect, metrics))
            .map(|t| t.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ApproximateMetrics, FontSpec};
    use crate::shapes::Rgba8;

    fn stroke_at(points: &[(f64, f64)]) -> Stroke {
        Stroke::from_points(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            Rgba8::BLACK,
            2.0,
        )
    }

    fn text_at(x: f64, y: f64) -> TextItem {
        TextItem::new("hi", Point::new(x, y), Rgba8::BLACK, &FontSpec::new("Arial", 10.0))
    }

    #[test]
    fn test_add_and_remove() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        let s = scene.add_stroke(stroke_at(&[(0.0, 0.0)]));
        let t = scene.add_text(text_at(0.0, 0.0));
        assert_eq!(scene.stroke_count(), 1);
        assert_eq!(scene.text_count(), 1);

        assert!(scene.remove_stroke(s).is_some());
        assert!(scene.remove_stroke(s).is_none());
        assert!(scene.remove_text(t).is_some());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let mut scene = Scene::new();
        let id = scene.add_stroke(stroke_at(&[(0.0, 0.0), (5.0, 0.0)]));
        let snapshot = scene.clone();

        scene.stroke_mut(id).unwrap().translate(Vec2::new(10.0, 0.0));
        scene.stroke_mut(id).unwrap().extend_to(Point::new(50.0, 50.0));

        let original = snapshot.stroke(id).unwrap();
        assert_eq!(original.points, vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);
        assert_ne!(scene, snapshot);
    }

    #[test]
    fn test_translate_from_skips_missing_ids() {
        let mut scene = Scene::new();
        let id = scene.add_stroke(stroke_at(&[(1.0, 1.0)]));
        let t = scene.add_text(text_at(2.0, 2.0));
        let base = scene.clone();
        let added_later = scene.add_stroke(stroke_at(&[(9.0, 9.0)]));

        let strokes = [id, added_later, uuid::Uuid::new_v4()];
        scene.translate_from(&base, &strokes, &[t], Vec2::new(1.0, 2.0));
        scene.translate_from(&base, &strokes, &[t], Vec2::new(3.0, 4.0));
        assert_eq!(scene.stroke(id).unwrap().points, vec![Point::new(4.0, 5.0)]);
        assert_eq!(scene.text(t).unwrap().anchor, Point::new(5.0, 6.0));
        assert_eq!(scene.stroke(added_later).unwrap().points, vec![Point::new(9.0, 9.0)]);
        // The base scene keeps the original positions.
        assert_eq!(base.stroke(id).unwrap().points, vec![Point::new(1.0, 1.0)]);
    }

    #[test]
    fn test_erase_at() {
        let m = ApproximateMetrics::default();
        let mut scene = Scene::new();
        let near = scene.add_stroke(stroke_at(&[(0.0, 0.0), (40.0, 0.0)]));
        let far = scene.add_stroke(stroke_at(&[(100.0, 100.0)]));
        scene.add_text(text_at(0.0, 10.0));

        // radius 5 + width 2: (4, 3) is 7 away from (0, 0); also inside the text box.
        let outcome = scene.erase_at(Point::new(4.0, 3.0), 5.0, &m);
        assert_eq!(outcome, EraseOutcome { strokes: 1, texts: 1 });
        assert!(!scene.contains_stroke(near));
        assert!(scene.contains_stroke(far));
        assert_eq!(scene.text_count(), 0);

        assert!(scene.erase_at(Point::new(500.0, 500.0), 5.0, &m).is_empty());
    }

    #[test]
    fn test_items_in_rect() {
        let m = ApproximateMetrics::default();
        let mut scene = Scene::new();
        let a = scene.add_stroke(stroke_at(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)]));
        scene.add_stroke(stroke_at(&[(20.0, 20.0)]));
        let t = scene.add_text(text_at(0.0, 10.0));

        let rect = Rect::new(0.0, 0.0, 6.0, 6.0);
        assert_eq!(scene.strokes_in_rect(rect), vec![a]);
        assert_eq!(scene.texts_in_rect(rect, &m), vec![t]);
        assert!(scene.texts_in_rect(Rect::new(50.0, 50.0, 60.0, 60.0), &m).is_empty());
    }
}
