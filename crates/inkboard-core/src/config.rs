//! Per-canvas style configuration.
//!
//! New strokes and texts capture these values when they are created; later
//! changes to the defaults do not touch existing items.

use crate::metrics::{DEFAULT_FONT_FAMILY, FontSpec};
use crate::shapes::Rgba8;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

/// Allowed pen/eraser widths.
pub const PEN_WIDTH_RANGE: RangeInclusive<u32> = 1..=50;
/// Allowed text sizes.
pub const TEXT_SIZE_RANGE: RangeInclusive<u32> = 6..=72;

/// Extra Manhattan slack added to the pen width when erasing.
pub const ERASER_MARGIN: f64 = 3.0;

/// Rejected style value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("Pen width {0} is outside 1..=50")]
    PenWidth(u32),
    #[error("Text size {0} is outside 6..=72")]
    TextSize(u32),
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error("Font family must not be empty")]
    EmptyFontFamily,
}

/// Current drawing style of a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub pen_color: Rgba8,
    /// Pen and eraser width.
    pub pen_width: u32,
    /// Font size for new text labels.
    pub text_size: u32,
    pub font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            pen_color: Rgba8::BLACK,
            pen_width: 2,
            text_size: 14,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl StyleConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)
            .inspect_err(|e| log::warn!("Rejected style config {}: {}", path.display(), e))?;
        log::debug!("Loaded style config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pen_width(self.pen_width)?;
        check_text_size(self.text_size)?;
        if self.font_family.trim().is_empty() {
            return Err(ConfigError::EmptyFontFamily);
        }
        Ok(())
    }

    /// Font used for new text labels.
    pub fn text_font(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), f64::from(self.text_size))
    }

    /// Proximity radius for the eraser.
    pub fn eraser_radius(&self) -> f64 {
        f64::from(self.pen_width) + ERASER_MARGIN
    }

    /// Radius of the pointer preview circle.
    pub fn cursor_radius(&self) -> f64 {
        f64::from((self.pen_width / 2).max(2))
    }
}

/// Values accepted from the style dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleUpdate {
    pub pen_width: u32,
    pub text_size: u32,
    pub pen_color: Rgba8,
}

impl StyleUpdate {
    /// Dialog initial values for `style`.
    pub fn from_style(style: &StyleConfig) -> Self {
        Self {
            pen_width: style.pen_width,
            text_size: style.text_size,
            pen_color: style.pen_color,
        }
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        check_pen_width(self.pen_width)?;
        check_text_size(self.text_size)
    }
}

fn check_pen_width(width: u32) -> Result<(), StyleError> {
    if PEN_WIDTH_RANGE.contains(&width) {
        Ok(())
    } else {
        Err(StyleError::PenWidth(width))
    }
}

fn check_text_size(size: u32) -> Result<(), StyleError> {
    if TEXT_SIZE_RANGE.contains(&size) {
        Ok(())
    } else {
        Err(StyleError::TextSize(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.pen_color, Rgba8::BLACK);
        assert_eq!(style.pen_width, 2);
        assert_eq!(style.text_size, 14);
        assert!(style.validate().is_ok());
        assert!((style.eraser_radius() - 5.0).abs() < f64::EPSILON);
        assert!((style.cursor_radius() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cursor_radius_halves_width() {
        let style = StyleConfig {
            pen_width: 9,
            ..StyleConfig::default()
        };
        assert!((style.cursor_radius() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_partial() {
        let style = StyleConfig::from_json(r##"{ "pen_color": "#ff0000", "pen_width": 8 }"##).unwrap();
        assert_eq!(style.pen_color, Rgba8::rgb(255, 0, 0));
        assert_eq!(style.pen_width, 8);
        assert_eq!(style.text_size, 14);
        assert_eq!(style.font_family, "Arial");
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let err = StyleConfig::from_json(r#"{ "text_size": 100 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Style(StyleError::TextSize(100))));

        let err = StyleConfig::from_json(r#"{ "pen_width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Style(StyleError::PenWidth(0))));

        let err = StyleConfig::from_json(r#"{ "font_family": " " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyFontFamily));
    }

    #[test]
    fn test_from_json_rejects_bad_color() {
        let err = StyleConfig::from_json(r#"{ "pen_color": "mauve-ish" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = StyleConfig::from_json(r##"{ "pen_color": "#+f+f+f" }"##).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let style = StyleConfig {
            pen_color: Rgba8::rgb(0, 120, 215),
            pen_width: 5,
            text_size: 30,
            font_family: "Helvetica".to_string(),
        };
        let json = style.to_json().unwrap();
        assert_eq!(StyleConfig::from_json(&json).unwrap(), style);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "text_size": 24 }}"#).unwrap();
        let style = StyleConfig::load(file.path()).unwrap();
        assert_eq!(style.text_size, 24);

        let missing = file.path().with_extension("missing");
        assert!(matches!(StyleConfig::load(missing), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_style_update_validation() {
        let mut update = StyleUpdate::from_style(&StyleConfig::default());
        assert!(update.validate().is_ok());
        update.pen_width = 51;
        assert_eq!(update.validate(), Err(StyleError::PenWidth(51)));
        update.pen_width = 50;
        update.text_size = 5;
        assert_eq!(update.validate(), Err(StyleError::TextSize(5)));
    }
}
