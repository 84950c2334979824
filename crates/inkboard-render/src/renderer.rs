//! Renderer trait abstraction.

use inkboard_core::canvas::Canvas;
use inkboard_core::config::StyleConfig;
use inkboard_core::metrics::FontMetrics;
use inkboard_core::scene::Scene;
use inkboard_core::tools::ModeKind;
use kurbo::{Point, Rect, Size};
use peniko::Color;

/// Context for a single render frame.
///
/// Captures everything a backend needs from the canvas so renderers stay
/// independent of the canvas' metrics type.
pub struct RenderContext<'a> {
    /// Items to draw, in creation order.
    pub scene: &'a Scene,
    /// Current style (cursor preview color and size).
    pub style: &'a StyleConfig,
    pub mode: ModeKind,
    /// Last known pointer position.
    pub cursor: Option<Point>,
    /// Active marquee, normalised.
    pub marquee_rect: Option<Rect>,
    /// Union bounds of the current selection.
    pub selection_bounds: Option<Rect>,
    /// Viewport size in canvas units.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Selection highlight color (marquee and selection outline).
    pub selection_color: Color,
    /// Marquee fill.
    pub marquee_fill_color: Color,
    /// Cursor preview color in erase mode.
    pub eraser_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new<M: FontMetrics>(canvas: &'a Canvas<M>, viewport_size: Size) -> Self {
        Self {
            scene: canvas.scene(),
            style: canvas.style(),
            mode: canvas.mode().kind(),
            cursor: canvas.cursor(),
            marquee_rect: canvas.marquee_rect(),
            selection_bounds: canvas.selection_bounds(),
            viewport_size,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            selection_color: Color::from_rgba8(0, 120, 215, 255),
            marquee_fill_color: Color::from_rgba8(0, 120, 215, 50),
            eraser_color: Color::from_rgba8(255, 0, 0, 128),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection outline and marquee colors.
    pub fn with_selection_color(mut self, outline: Color, fill: Color) -> Self {
        self.selection_color = outline;
        self.marquee_fill_color = fill;
        self
    }

    /// Cursor preview circle for this frame, if any: center, radius, color.
    pub fn cursor_preview(&self) -> Option<(Point, f64, Color)> {
        let center = self.cursor?;
        let color = match self.mode {
            ModeKind::Draw => self.style.pen_color.into(),
            ModeKind::Erase => self.eraser_color,
            ModeKind::Select | ModeKind::TextPlacement => return None,
        };
        Some((center, self.style.cursor_radius(), color))
    }
}

/// Trait for rendering backends.
///
/// Implementations may draw directly with a toolkit painter or record
/// commands for later replay.
pub trait Renderer: Send + Sync {
    /// Build the command buffer for a frame.
    ///
    /// Called once per frame; should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkboard_core::shapes::Rgba8;
    use inkboard_core::{Key, MouseButton};

    #[test]
    fn test_cursor_preview_by_mode() {
        let mut canvas = Canvas::new();
        let ctx = RenderContext::new(&canvas, Size::new(800.0, 600.0));
        assert!(ctx.cursor_preview().is_none());

        canvas.set_pen_color(Rgba8::rgb(10, 20, 30));
        canvas.pointer_move(Point::new(40.0, 50.0));
        let ctx = RenderContext::new(&canvas, Size::new(800.0, 600.0));
        let (center, radius, color) = ctx.cursor_preview().unwrap();
        assert_eq!(center, Point::new(40.0, 50.0));
        assert!((radius - 2.0).abs() < f64::EPSILON);
        assert_eq!(Rgba8::from(color), Rgba8::rgb(10, 20, 30));

        canvas.set_erase_mode();
        canvas.set_pen_width(20);
        let ctx = RenderContext::new(&canvas, Size::new(800.0, 600.0));
        let (_, radius, color) = ctx.cursor_preview().unwrap();
        assert!((radius - 10.0).abs() < f64::EPSILON);
        assert_eq!(Rgba8::from(color), Rgba8::new(255, 0, 0, 128));

        canvas.set_select_mode();
        let ctx = RenderContext::new(&canvas, Size::new(800.0, 600.0));
        assert!(ctx.cursor_preview().is_none());
    }

    #[test]
    fn test_context_captures_marquee() {
        let mut canvas = Canvas::new();
        canvas.set_select_mode();
        canvas.pointer_down(Point::new(30.0, 30.0), MouseButton::Left);
        canvas.pointer_move(Point::new(10.0, 20.0));
        let ctx = RenderContext::new(&canvas, Size::new(800.0, 600.0));
        assert_eq!(ctx.marquee_rect, Some(Rect::new(10.0, 20.0, 30.0, 30.0)));
        assert!(ctx.selection_bounds.is_none());

        canvas.key_down(&Key::Escape);
        canvas.pointer_up(Point::new(10.0, 20.0), MouseButton::Left);
        let ctx = RenderContext::new(&canvas, Size::new(800.0, 600.0))
            .with_background(Color::from_rgba8(0, 0, 0, 255));
        assert!(ctx.marquee_rect.is_none());
        assert_eq!(Rgba8::from(ctx.background_color), Rgba8::BLACK);
    }
}
