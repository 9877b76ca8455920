//! Fonts, paddings and spacing shared by every shape placed on a diagram.
//!
//! A [`Style`] is handed to a diagram at construction time. The diagram
//! applies its font and text padding to shapes that opt in through
//! [`HasFont`](crate::shape::HasFont) and
//! [`HasTextPad`](crate::shape::HasTextPad), and uses its spacing as the
//! default gap of relative placement.

use crate::{color::Color, geometry::Insets};

/// Default gap between shapes placed relative to each other.
pub const DEFAULT_SPACING: i32 = 30;

/// Default padding between a shape's outline and its text.
pub const DEFAULT_TEXT_PAD: Insets = Insets::new(2, 10, 7, 10);

const DEFAULT_FONT_FAMILY: &str = "Arial";
const DEFAULT_FONT_HEIGHT: i32 = 12;
const DEFAULT_LINE_HEIGHT: i32 = 16;

/// Font used to size and render text.
///
/// Text is measured with a fixed per-glyph width table scaled by the font
/// height, which keeps layout deterministic regardless of installed fonts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    family: String,
    height: i32,
    line_height: i32,
}

impl Font {
    pub fn new(family: impl Into<String>, height: i32, line_height: i32) -> Self {
        Self {
            family: family.into(),
            height,
            line_height,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Height of a glyph, in canvas units.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Distance between two consecutive baselines.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Estimated advance width of `text` without rounding.
    pub fn measure(&self, text: &str) -> f32 {
        let ratio: f32 = text.chars().map(glyph_width_ratio).sum();
        ratio * self.height as f32
    }

    /// Width of the widest line of `text`, rounded up to whole units.
    pub fn text_width(&self, text: &str) -> i32 {
        text.lines()
            .map(|line| self.measure(line).ceil() as i32)
            .max()
            .unwrap_or(0)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_HEIGHT, DEFAULT_LINE_HEIGHT)
    }
}

fn glyph_width_ratio(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.28,
        'f' | 't' | 'r' | 'I' | ' ' | '(' | ')' | '[' | ']' | '-' | '*' => 0.36,
        'm' | 'w' | 'M' | 'W' => 0.86,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii_digit() => 0.56,
        _ => 0.54,
    }
}

/// Width of a text box: horizontal padding around the measured text.
pub fn box_width(font: &Font, pad: Insets, text: &str) -> i32 {
    pad.left() + font.text_width(text) + pad.right()
}

/// Height of a text box holding `lines` lines.
pub fn box_height(font: &Font, pad: Insets, lines: usize) -> i32 {
    pad.vertical_sum() + lines as i32 * font.line_height()
}

/// Diagram-wide styling handed to the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    font: Font,
    text_pad: Insets,
    pad: Insets,
    spacing: i32,
    stroke: Color,
    fill: Color,
    background: Option<Color>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: Font::default(),
            text_pad: DEFAULT_TEXT_PAD,
            pad: Insets::default(),
            spacing: DEFAULT_SPACING,
            stroke: Color::default(),
            fill: Color::from_rgb8(0xff, 0xff, 0xcc),
            background: None,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Sets the padding between a shape's outline and its text.
    pub fn with_text_pad(mut self, text_pad: Insets) -> Self {
        self.text_pad = text_pad;
        self
    }

    /// Sets the inflation applied to every shape's bounding box when the
    /// canvas is sized.
    pub fn with_pad(mut self, pad: Insets) -> Self {
        self.pad = pad;
        self
    }

    /// Sets the default gap used by relative placement.
    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn text_pad(&self) -> Insets {
        self.text_pad
    }

    pub fn pad(&self) -> Insets {
        self.pad
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    pub fn fill(&self) -> &Color {
        &self.fill
    }

    pub fn background(&self) -> Option<&Color> {
        self.background.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_measure_scales_with_height() {
        let small = Font::new("Arial", 10, 14);
        let large = Font::new("Arial", 20, 28);
        assert_approx_eq!(f32, large.measure("Hello"), small.measure("Hello") * 2.0);
    }

    #[test]
    fn test_measure_empty() {
        assert_approx_eq!(f32, Font::default().measure(""), 0.0);
        assert_eq!(Font::default().text_width(""), 0);
    }

    #[test]
    fn test_text_width_uses_widest_line() {
        let font = Font::default();
        let multi = font.text_width("a\nwider line");
        assert_eq!(multi, font.text_width("wider line"));
    }

    #[test]
    fn test_wide_glyphs_measure_wider() {
        let font = Font::default();
        assert!(font.measure("WWW") > font.measure("iii"));
    }

    #[test]
    fn test_box_dimensions() {
        let font = Font::new("Arial", 10, 16);
        let pad = Insets::new(2, 10, 7, 10);
        assert_eq!(box_height(&font, pad, 1), 25);
        assert_eq!(box_height(&font, pad, 3), 57);
        assert_eq!(box_width(&font, pad, ""), 20);
    }

    #[test]
    fn test_style_defaults() {
        let style = Style::default();
        assert_eq!(style.spacing(), DEFAULT_SPACING);
        assert_eq!(style.font().family(), "Arial");
        assert!(style.background().is_none());
    }

    #[test]
    fn test_style_builder() {
        let style = Style::new()
            .with_spacing(12)
            .with_pad(Insets::uniform(4))
            .with_font(Font::new("Courier", 14, 18));
        assert_eq!(style.spacing(), 12);
        assert_eq!(style.pad(), Insets::uniform(4));
        assert_eq!(style.font().line_height(), 18);
    }
}
