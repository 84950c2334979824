//! The annotation canvas: event routing, editing operations and history.

use crate::config::{StyleConfig, StyleError, StyleUpdate, PEN_WIDTH_RANGE, TEXT_SIZE_RANGE};
use crate::history::History;
use crate::host::HostPrompts;
use crate::input::{InputState, Key, KeyEvent, MouseButton, PointerEvent};
use crate::metrics::{ApproximateMetrics, FontMetrics};
use crate::scene::{EraseOutcome, Scene};
use crate::selection::Selection;
use crate::shapes::{Rgba8, Stroke, TextItem};
use crate::tools::{Interaction, Mode};
use kurbo::{Point, Rect};

/// Runtime state of one annotation canvas.
///
/// Owns the scene, selection, history and style exclusively. Every
/// operation is synchronous; hosts with several event sources must
/// serialise calls per canvas.
#[derive(Debug, Clone)]
pub struct Canvas<M = ApproximateMetrics> {
    scene: Scene,
    history: History,
    selection: Selection,
    mode: Mode,
    interaction: Interaction,
    style: StyleConfig,
    input: InputState,
    metrics: M,
    redraw_requested: bool,
}

impl Default for Canvas<ApproximateMetrics> {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas<ApproximateMetrics> {
    /// Create an empty canvas with default style and approximate metrics.
    pub fn new() -> Self {
        Self::with_metrics(ApproximateMetrics::default())
    }
}

impl<M: FontMetrics> Canvas<M> {
    /// Create an empty canvas measuring text with `metrics`.
    pub fn with_metrics(metrics: M) -> Self {
        Self::with_config(StyleConfig::default(), metrics)
    }

    /// Create an empty canvas with an initial style.
    pub fn with_config(style: StyleConfig, metrics: M) -> Self {
        Self {
            scene: Scene::new(),
            history: History::new(),
            selection: Selection::new(),
            mode: Mode::default(),
            interaction: Interaction::default(),
            style,
            input: InputState::new(),
            metrics,
            redraw_requested: false,
        }
    }

    // --- Accessors -------------------------------------------------------

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn pending_text(&self) -> Option<&str> {
        self.mode.pending_text()
    }

    /// Last known pointer position.
    pub fn cursor(&self) -> Option<Point> {
        self.input.pointer_position
    }

    /// The active marquee rectangle, normalised.
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.interaction.marquee_rect()
    }

    /// Bounds of the current selection.
    pub fn selection_bounds(&self) -> Option<Rect> {
        self.selection.bounds(&self.scene, &self.metrics)
    }

    /// Measured bounds of a text item.
    pub fn text_bounds(&self, text: &TextItem) -> Rect {
        text.bounds(&self.metrics)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_len(&self) -> usize {
        self.history.undo_len()
    }

    pub fn redo_len(&self) -> usize {
        self.history.redo_len()
    }

    /// Return and reset the redraw flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    // --- Modes -----------------------------------------------------------

    pub fn set_draw_mode(&mut self) {
        self.set_mode(Mode::Draw);
    }

    pub fn set_select_mode(&mut self) {
        self.set_mode(Mode::Select);
    }

    pub fn set_erase_mode(&mut self) {
        self.set_mode(Mode::Erase);
    }

    /// Enter text placement with `text` waiting for the next click.
    pub fn arm_text_placement(&mut self, text: impl Into<String>) {
        self.set_mode(Mode::text_placement(text));
    }

    /// Switch modes. Any pending text and in-flight gesture are dropped, and
    /// the selection is cleared unless the new mode is select.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != Mode::Select {
            self.selection.clear();
        }
        log::debug!("Mode {:?} -> {:?}", self.mode.kind(), mode.kind());
        self.mode = mode;
        self.interaction = Interaction::Idle;
        self.request_redraw();
    }

    /// Ask the host for label text and arm text placement with it.
    /// Returns whether anything was armed.
    pub fn request_text(&mut self, prompts: &mut impl HostPrompts) -> bool {
        match prompts.prompt_text() {
            Some(text) if !text.is_empty() => {
                self.arm_text_placement(text);
                true
            }
            _ => false,
        }
    }

    // --- Input -----------------------------------------------------------

    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => self.pointer_down(position, button),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position, button } => self.pointer_up(position, button),
        }
    }

    pub fn handle_key_event(&mut self, event: KeyEvent) {
        if let KeyEvent::Pressed(key) = event {
            self.key_down(&key);
        }
    }

    pub fn pointer_down(&mut self, position: Point, button: MouseButton) {
        self.input
            .handle_pointer_event(&PointerEvent::Down { position, button });
        if !button.is_primary() {
            return;
        }

        match self.mode {
            Mode::Draw => self.begin_stroke(position),
            Mode::Erase => {
                self.snapshot_and_push();
                self.erase_at(position);
                self.interaction = Interaction::Erasing;
            }
            Mode::Select => self.begin_select(position),
            Mode::TextPlacement { .. } => self.place_text(position),
        }
        self.request_redraw();
    }

    pub fn pointer_move(&mut self, position: Point) {
        self.input
            .handle_pointer_event(&PointerEvent::Move { position });

        match &mut self.interaction {
            Interaction::Idle => {}
            Interaction::Drawing { stroke } => {
                let id = *stroke;
                if let Some(stroke) = self.scene.stroke_mut(id) {
                    stroke.extend_to(position);
                }
            }
            Interaction::Erasing => {
                self.erase_at(position);
            }
            Interaction::Marquee { current, .. } => *current = position,
            Interaction::Dragging { origin, base } => {
                let delta = position - *origin;
                self.scene.translate_from(
                    base,
                    self.selection.strokes(),
                    self.selection.texts(),
                    delta,
                );
            }
        }
        self.request_redraw();
    }

    pub fn pointer_up(&mut self, position: Point, button: MouseButton) {
        let was_pressed = self.input.is_primary_pressed();
        self.input
            .handle_pointer_event(&PointerEvent::Up { position, button });
        // A release without a matching press (e.g. pressed outside the canvas).
        if !button.is_primary() || !was_pressed {
            return;
        }

        match std::mem::take(&mut self.interaction) {
            Interaction::Marquee { start, .. } => {
                let rect = crate::geometry::normalized(start, position);
                self.selection.select_in_rect(&self.scene, rect, &self.metrics);
                log::debug!("Marquee {:?} selected {} item(s)", rect, self.selection.len());
            }
            Interaction::Drawing { stroke } => {
                let points = self.scene.stroke(stroke).map_or(0, Stroke::len);
                log::debug!("Stroke finished with {} point(s)", points);
            }
            Interaction::Dragging { .. } | Interaction::Erasing | Interaction::Idle => {}
        }
        self.request_redraw();
    }

    pub fn key_down(&mut self, key: &Key) {
        match key {
            Key::Delete => {
                self.delete_selection();
            }
            Key::Escape => {
                self.selection.clear();
                self.mode.clear_pending_text();
                self.request_redraw();
            }
            Key::Other(_) => {}
        }
    }

    fn begin_stroke(&mut self, position: Point) {
        self.snapshot_and_push();
        let stroke = Stroke::new(
            position,
            self.style.pen_color,
            f64::from(self.style.pen_width),
        );
        let id = self.scene.add_stroke(stroke);
        self.interaction = Interaction::Drawing { stroke: id };
    }

    fn begin_select(&mut self, position: Point) {
        if self.selection.hit_test(&self.scene, position, &self.metrics) {
            // Moves are applied live and not recorded separately in history.
            self.interaction = Interaction::Dragging {
                origin: position,
                base: self.scene.clone(),
            };
        } else {
            self.selection.clear();
            self.interaction = Interaction::Marquee {
                start: position,
                current: position,
            };
        }
    }

    fn place_text(&mut self, position: Point) {
        let Some(text) = self.mode.take_pending_text() else {
            return;
        };
        self.snapshot_and_push();
        let item = TextItem::new(text, position, self.style.pen_color, &self.style.text_font());
        log::debug!("Placed text {:?} at {:?}", item.text, position);
        self.scene.add_text(item);
    }

    // --- Editing ---------------------------------------------------------

    /// Erase every stroke near `point` and every text containing it.
    ///
    /// Does not touch history; callers snapshot once per gesture.
    pub fn erase_at(&mut self, point: Point) -> EraseOutcome {
        let outcome = self
            .scene
            .erase_at(point, self.style.eraser_radius(), &self.metrics);
        if !outcome.is_empty() {
            self.selection.retain_live(&self.scene);
            log::debug!(
                "Erased {} stroke(s), {} text(s) at {:?}",
                outcome.strokes,
                outcome.texts,
                point
            );
            self.request_redraw();
        }
        outcome
    }

    /// Remove the selected items. No-op (and no history entry) when nothing
    /// is selected. Returns whether anything was deleted.
    pub fn delete_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.snapshot_and_push();
        for &id in self.selection.strokes() {
            self.scene.remove_stroke(id);
        }
        for &id in self.selection.texts() {
            self.scene.remove_text(id);
        }
        log::debug!("Deleted {} selected item(s)", self.selection.len());
        self.selection.clear();
        self.request_redraw();
        true
    }

    /// Remove everything. No-op (and no history entry) on an empty scene.
    pub fn clear(&mut self) -> bool {
        if self.scene.is_empty() {
            return false;
        }
        self.snapshot_and_push();
        log::info!(
            "Clearing canvas ({} stroke(s), {} text(s))",
            self.scene.stroke_count(),
            self.scene.text_count()
        );
        self.scene.clear();
        self.selection.clear();
        self.interaction = Interaction::Idle;
        self.request_redraw();
        true
    }

    // --- History ---------------------------------------------------------

    /// Record the current scene as an undo point. Call once per discrete
    /// action, before mutating.
    pub fn snapshot_and_push(&mut self) {
        self.history.push(self.scene.clone());
    }

    /// Undo the last action. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.scene.clone()) {
            Some(previous) => {
                self.restore(previous);
                log::debug!("Undo ({} left)", self.history.undo_len());
                true
            }
            None => false,
        }
    }

    /// Redo the last undone action. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.scene.clone()) {
            Some(next) => {
                self.restore(next);
                log::debug!("Redo ({} left)", self.history.redo_len());
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, scene: Scene) {
        self.scene = scene;
        self.selection.clear();
        self.interaction = Interaction::Idle;
        self.request_redraw();
    }

    // --- Style -----------------------------------------------------------

    pub fn pen_color(&self) -> Rgba8 {
        self.style.pen_color
    }

    pub fn set_pen_color(&mut self, color: impl Into<Rgba8>) {
        self.style.pen_color = color.into();
        self.request_redraw();
    }

    pub fn pen_width(&self) -> u32 {
        self.style.pen_width
    }

    /// Set the pen/eraser width, clamped to 1–50.
    pub fn set_pen_width(&mut self, width: u32) {
        self.style.pen_width = width.clamp(*PEN_WIDTH_RANGE.start(), *PEN_WIDTH_RANGE.end());
        self.request_redraw();
    }

    pub fn text_size(&self) -> u32 {
        self.style.text_size
    }

    /// Set the default size for new text, clamped to 6–72. Existing texts
    /// keep their size.
    pub fn set_text_size(&mut self, size: u32) {
        self.style.text_size = size.clamp(*TEXT_SIZE_RANGE.start(), *TEXT_SIZE_RANGE.end());
        self.request_redraw();
    }

    /// Apply the style dialog result: pen width, pen color, default text size,
    /// and the text size of every selected text.
    pub fn apply_style(&mut self, update: StyleUpdate) -> Result<(), StyleError> {
        if let Err(e) = update.validate() {
            log::warn!("Rejected style update: {}", e);
            return Err(e);
        }
        self.style.pen_width = update.pen_width;
        let size = f64::from(update.text_size);
        for &id in self.selection.texts() {
            if let Some(text) = self.scene.text_mut(id) {
                text.font_size = size;
            }
        }
        self.style.text_size = update.text_size;
        self.style.pen_color = update.pen_color;
        self.request_redraw();
        Ok(())
    }

    /// Run the host's style dialog and apply the result.
    /// Returns `Ok(false)` if the user cancelled.
    pub fn configure_style(&mut self, prompts: &mut impl HostPrompts) -> Result<bool, StyleError> {
        match prompts.prompt_style(&self.style) {
            Some(update) => self.apply_style(update).map(|()| true),
            None => Ok(false),
        }
    }
}
