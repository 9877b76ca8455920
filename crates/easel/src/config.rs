//! Configuration types for Easel diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are styled. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources; every field is optional and falls back to
//! the defaults of [`Style`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Fonts, paddings, spacing and colors.
//!
//! # Example
//!
//! ```
//! # use easel::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().to_style().is_ok());
//! ```

use serde::Deserialize;

use easel_core::{
    color::Color,
    geometry::Insets,
    style::{Font, Style},
};

use crate::EaselError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to the [`Style`] defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    font_family: Option<String>,

    /// Glyph height in canvas units.
    #[serde(default)]
    font_height: Option<i32>,

    #[serde(default)]
    line_height: Option<i32>,

    /// Default gap between shapes placed relative to each other.
    #[serde(default)]
    spacing: Option<i32>,

    /// Extra room added around every shape when the canvas is sized.
    #[serde(default)]
    padding: Option<Insets>,

    /// Padding between a shape's outline and its text.
    #[serde(default)]
    text_padding: Option<Insets>,

    #[serde(default)]
    stroke_color: Option<String>,

    #[serde(default)]
    fill_color: Option<String>,

    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, EaselError> {
        parse_color("background", self.background_color.as_deref())
    }

    /// Builds the diagram [`Style`] described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Config`] if a color string is invalid.
    pub fn to_style(&self) -> Result<Style, EaselError> {
        let defaults = Style::default();
        let default_font = defaults.font();
        let font = Font::new(
            self.font_family
                .clone()
                .unwrap_or_else(|| default_font.family().to_string()),
            self.font_height.unwrap_or(default_font.height()),
            self.line_height.unwrap_or(default_font.line_height()),
        );

        let mut style = Style::new()
            .with_font(font)
            .with_spacing(self.spacing.unwrap_or(defaults.spacing()))
            .with_pad(self.padding.unwrap_or(defaults.pad()))
            .with_text_pad(self.text_padding.unwrap_or(defaults.text_pad()))
            .with_background(self.background_color()?);

        if let Some(stroke) = parse_color("stroke", self.stroke_color.as_deref())? {
            style = style.with_stroke(stroke);
        }
        if let Some(fill) = parse_color("fill", self.fill_color.as_deref())? {
            style = style.with_fill(fill);
        }

        Ok(style)
    }
}

fn parse_color(name: &str, value: Option<&str>) -> Result<Option<Color>, EaselError> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| EaselError::Config(format!("Invalid {name} color in config: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default_style() {
        let style = AppConfig::default().style().to_style().unwrap();
        assert_eq!(style, Style::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            font_height = 14
            spacing = 12
            padding = { right = 5, bottom = 5 }
            "#,
        )
        .unwrap();
        let style = config.style().to_style().unwrap();
        assert_eq!(style.font().height(), 14);
        assert_eq!(style.font().family(), "Arial");
        assert_eq!(style.spacing(), 12);
        assert_eq!(style.pad(), Insets::new(0, 5, 5, 0));
        assert_eq!(style.text_pad(), Style::default().text_pad());
    }

    #[test]
    fn test_colors_are_parsed() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            stroke_color = "#333333"
            background_color = "white"
            "##,
        )
        .unwrap();
        let style = config.style().to_style().unwrap();
        assert_eq!(style.stroke(), &Color::new("#333333").unwrap());
        assert!(style.background().is_some());
    }

    #[test]
    fn test_invalid_color_is_config_error() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            fill_color = "not-a-color"
            "#,
        )
        .unwrap();
        let err = config.style().to_style().unwrap_err();
        assert!(matches!(err, EaselError::Config(_)));
        assert!(err.to_string().contains("fill"));
    }
}
