//! Snapshot-based undo/redo history.

use crate::scene::Scene;
use std::collections::VecDeque;

/// Maximum number of undo states to keep.
pub const MAX_UNDO_HISTORY: usize = 50;

/// Undo and redo stacks of full scene snapshots.
///
/// The undo stack is bounded to [`MAX_UNDO_HISTORY`] entries, oldest evicted
/// first. The redo stack is unbounded and is emptied by every [`push`].
///
/// [`push`]: History::push
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: VecDeque<Scene>,
    redo_stack: Vec<Scene>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state before a new action. Clears the redo stack.
    pub fn push(&mut self, snapshot: Scene) {
        self.push_bounded(snapshot);
        self.redo_stack.clear();
    }

    fn push_bounded(&mut self, snapshot: Scene) {
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.pop_front();
        }
    }

    /// Step back: `current` moves to the redo stack and the most recent undo
    /// entry is returned. `None` (and no change) if there is nothing to undo.
    pub fn undo(&mut self, current: Scene) -> Option<Scene> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward: `current` moves to the undo stack (subject to the cap)
    /// and the most recent redo entry is returned.
    pub fn redo(&mut self, current: Scene) -> Option<Scene> {
        let next = self.redo_stack.pop()?;
        self.push_bounded(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
