//! Font-metrics service used to measure text labels.
//!
//! The host toolkit owns real font shaping; the engine only needs an extent
//! and an ascent to place a text's bounding box relative to its baseline
//! anchor.

use serde::{Deserialize, Serialize};

/// Default font family for text labels.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// A font family at a given size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Family name as understood by the host toolkit.
    pub family: String,
    /// Font size (points).
    pub size: f64,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, 14.0)
    }
}

/// Measured extent of a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Width of the ink/advance box.
    pub width: f64,
    /// Height of the box (ascent + descent, or line height).
    pub height: f64,
    /// Distance from the baseline to the top of the box.
    pub ascent: f64,
}

/// Measures strings for a font.
///
/// Implemented by the host (e.g. on top of its text layout engine).
pub trait FontMetrics {
    fn measure(&self, font: &FontSpec, text: &str) -> TextMetrics;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn measure(&self, font: &FontSpec, text: &str) -> TextMetrics {
        (**self).measure(font, text)
    }
}

impl<M: FontMetrics + ?Sized> FontMetrics for Box<M> {
    fn measure(&self, font: &FontSpec, text: &str) -> TextMetrics {
        (**self).measure(font, text)
    }
}

/// Fixed-ratio metrics for when no font engine is available (and for tests).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMetrics {
    /// Advance per character as a fraction of the font size.
    pub char_width_factor: f64,
    /// Ascent as a fraction of the font size.
    pub ascent_factor: f64,
    /// Line height as a fraction of the font size.
    pub line_height_factor: f64,
}

impl Default for ApproximateMetrics {
    fn default() -> Self {
        Self {
            char_width_factor: 0.6,
            ascent_factor: 0.8,
            line_height_factor: 1.2,
        }
    }
}

impl FontMetrics for ApproximateMetrics {
    fn measure(&self, font: &FontSpec, text: &str) -> TextMetrics {
        let chars = text.chars().count() as f64;
        TextMetrics {
            width: chars * font.size * self.char_width_factor,
            height: font.size * self.line_height_factor,
            ascent: font.size * self.ascent_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approximate_metrics_scale_with_size() {
        let m = ApproximateMetrics::default();
        let small = m.measure(&FontSpec::new("Arial", 10.0), "hello");
        let large = m.measure(&FontSpec::new("Arial", 20.0), "hello");
        assert!((small.width - 30.0).abs() < 1e-9);
        assert!((large.width - 60.0).abs() < 1e-9);
        assert!((large.ascent - 16.0).abs() < 1e-9);
        assert!(large.height > large.ascent);
    }

    #[test]
    fn test_empty_string_has_zero_width() {
        let m = ApproximateMetrics::default();
        let tm = m.measure(&FontSpec::default(), "");
        assert_eq!(tm.width, 0.0);
        assert!(tm.height > 0.0);
    }

    #[test]
    fn test_boxed_metrics_delegate() {
        let boxed: Box<dyn FontMetrics> = Box::new(ApproximateMetrics::default());
        let direct = ApproximateMetrics::default().measure(&FontSpec::default(), "abc");
        assert_eq!(boxed.measure(&FontSpec::default(), "abc"), direct);
    }
}
