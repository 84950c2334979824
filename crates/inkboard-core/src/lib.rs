//! InkBoard Core Library
//!
//! Toolkit-agnostic annotation canvas: freehand strokes, text labels,
//! selection, erasing and undo/redo over an in-memory scene.

pub mod canvas;
pub mod config;
pub mod geometry;
pub mod history;
pub mod host;
pub mod input;
pub mod metrics;
pub mod scene;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::Canvas;
pub use config::{ConfigError, StyleConfig, StyleError, StyleUpdate};
pub use history::{History, MAX_UNDO_HISTORY};
pub use host::HostPrompts;
pub use input::{InputState, Key, KeyEvent, MouseButton, PointerEvent};
pub use metrics::{ApproximateMetrics, FontMetrics, FontSpec, TextMetrics};
pub use scene::{EraseOutcome, Scene};
pub use selection::Selection;
pub use shapes::{ItemId, Rgba8, Stroke, TextItem};
pub use tools::{Interaction, Mode, ModeKind};
