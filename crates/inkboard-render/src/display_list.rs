//! Backend-neutral renderer that records draw commands.
//!
//! Host toolkits replay the list with their own painter each frame.

use crate::renderer::{RenderContext, Renderer};
use inkboard_core::metrics::FontSpec;
use kurbo::{Cap, Join, Point, Rect, Stroke};
use peniko::Color;

/// Outline width of the marquee.
const MARQUEE_OUTLINE_WIDTH: f64 = 1.0;
/// Outline width of the selection bounds.
const SELECTION_OUTLINE_WIDTH: f64 = 2.0;

/// A single drawing primitive.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Fill a rectangle.
    FillRect { rect: Rect, color: Color },
    /// Stroke a rectangle outline.
    StrokeRect { rect: Rect, color: Color, style: Stroke },
    /// Connected line segments through `points`.
    Polyline {
        points: Vec<Point>,
        color: Color,
        style: Stroke,
    },
    /// Filled circle (single-point strokes and the cursor preview).
    Circle { center: Point, radius: f64, color: Color },
    /// Single-line text with its baseline starting at `anchor`.
    Text {
        text: String,
        anchor: Point,
        color: Color,
        font: FontSpec,
    },
}

/// Renderer that records a frame as a list of [`DrawCommand`]s.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last built frame, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    fn dashed(width: f64) -> Stroke {
        Stroke::new(width).with_dashes(0.0, [4.0 * width, 2.0 * width])
    }

    fn render_items(&mut self, ctx: &RenderContext) {
        for stroke in ctx.scene.strokes() {
            let color = Color::from(stroke.color);
            match stroke.points.as_slice() {
                [] => {}
                [point] => self.commands.push(DrawCommand::Circle {
                    center: *point,
                    radius: stroke.width / 2.0,
                    color,
                }),
                points => self.commands.push(DrawCommand::Polyline {
                    points: points.to_vec(),
                    color,
                    style: Stroke::new(stroke.width)
                        .with_caps(Cap::Round)
                        .with_join(Join::Round),
                }),
            }
        }

        for text in ctx.scene.texts() {
            self.commands.push(DrawCommand::Text {
                text: text.text.clone(),
                anchor: text.anchor,
                color: text.color.into(),
                font: text.font(),
            });
        }
    }

    fn render_overlays(&mut self, ctx: &RenderContext) {
        if let Some(rect) = ctx.marquee_rect {
            self.commands.push(DrawCommand::FillRect {
                rect,
                color: ctx.marquee_fill_color,
            });
            self.commands.push(DrawCommand::StrokeRect {
                rect,
                color: ctx.selection_color,
                style: Self::dashed(MARQUEE_OUTLINE_WIDTH),
            });
        }

        if let Some(rect) = ctx.selection_bounds {
            self.commands.push(DrawCommand::StrokeRect {
                rect,
                color: ctx.selection_color,
                style: Self::dashed(SELECTION_OUTLINE_WIDTH),
            });
        }

        if let Some((center, radius, color)) = ctx.cursor_preview() {
            self.commands.push(DrawCommand::Circle { center, radius, color });
        }
    }
}

impl Renderer for DisplayList {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.commands.clear();
        self.commands.push(DrawCommand::FillRect {
            rect: ctx.viewport_size.to_rect(),
            color: self.background_color(ctx),
        });
        self.render_items(ctx);
        self.render_overlays(ctx);
        log::trace!("Built display list with {} commands", self.commands.len());
    }
}
