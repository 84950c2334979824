//! Prompts the embedding application provides.

use crate::config::{StyleConfig, StyleUpdate};

/// Modal prompts supplied by the host toolkit.
///
/// Both calls may block on a dialog; `None` means the user cancelled.
pub trait HostPrompts {
    /// Ask for the text of a new label.
    fn prompt_text(&mut self) -> Option<String>;

    /// Show the style dialog (color picker, pen width 1–50, text size 6–72)
    /// initialised from `current`.
    fn prompt_style(&mut self, current: &StyleConfig) -> Option<StyleUpdate>;
}
