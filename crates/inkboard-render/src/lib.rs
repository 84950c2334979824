//! InkBoard Render Library
//!
//! Renderer abstraction for the annotation canvas and a display-list
//! implementation host toolkits replay with their own painter.

mod display_list;
mod renderer;

pub use display_list::{DisplayList, DrawCommand};
pub use renderer::{RenderContext, Renderer};
