//! Canvas modes and the in-flight gesture state.

use crate::scene::Scene;
use crate::shapes::ItemId;
use kurbo::{Point, Rect};

/// The active tool mode.
///
/// Text placement carries the string armed by the host; it is consumed by
/// the next primary click.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Draw,
    Select,
    Erase,
    TextPlacement {
        pending: Option<String>,
    },
}

/// Kind of mode, without attached data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Draw,
    Select,
    Erase,
    TextPlacement,
}

impl Mode {
    /// Text placement mode armed with `text`. An empty string arms nothing.
    pub fn text_placement(text: impl Into<String>) -> Self {
        let text = text.into();
        Mode::TextPlacement {
            pending: (!text.is_empty()).then_some(text),
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Draw => ModeKind::Draw,
            Mode::Select => ModeKind::Select,
            Mode::Erase => ModeKind::Erase,
            Mode::TextPlacement { .. } => ModeKind::TextPlacement,
        }
    }

    pub fn pending_text(&self) -> Option<&str> {
        match self {
            Mode::TextPlacement { pending } => pending.as_deref(),
            _ => None,
        }
    }

    /// Take the pending text, leaving the mode armed with nothing.
    pub fn take_pending_text(&mut self) -> Option<String> {
        match self {
            Mode::TextPlacement { pending } => pending.take(),
            _ => None,
        }
    }

    /// Forget any pending text without leaving the mode.
    pub fn clear_pending_text(&mut self) {
        if let Mode::TextPlacement { pending } = self {
            *pending = None;
        }
    }

    /// Whether the pointer preview circle is shown in this mode.
    pub fn shows_cursor(&self) -> bool {
        matches!(self, Mode::Draw | Mode::Erase)
    }
}

/// Gesture in progress between a primary pointer-down and pointer-up.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Drawing the stroke `stroke`.
    Drawing { stroke: ItemId },
    /// Erasing continuously under the pointer.
    Erasing,
    /// Rubber-band selection from `start` to `current`.
    Marquee { start: Point, current: Point },
    /// Moving the selection. Items are placed at their position in `base`
    /// offset by the pointer's travel from `origin`.
    Dragging { origin: Point, base: Scene },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// The normalised marquee rectangle, if a marquee is active.
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Interaction::Marquee { start, current } => Some(crate::geometry::normalized(*start, *current)),
            _ => None,
        }
    }
}
