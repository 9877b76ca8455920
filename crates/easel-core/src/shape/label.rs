use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    geometry::{Insets, Point},
    shape::{Drawable, HasFont, HasTextPad, Shape, SvgNode},
    style::{DEFAULT_TEXT_PAD, Font},
};

/// A single line of free-standing text.
///
/// The extent is the measured text only; the text padding is kept so
/// callers can offset labels from nearby shapes.
#[derive(Debug, Clone)]
pub struct Label {
    position: Point,
    text: String,
    font: Font,
    pad: Insets,
    class: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            position: Point::default(),
            text: text.into(),
            font: Font::default(),
            pad: DEFAULT_TEXT_PAD,
            class: "label".to_string(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn pad(&self) -> Insets {
        self.pad
    }
}

impl Shape for Label {
    fn position(&self) -> Point {
        self.position
    }

    fn width(&self) -> i32 {
        self.font.text_width(&self.text)
    }

    fn height(&self) -> i32 {
        self.font.line_height()
    }

    fn set_x(&mut self, x: i32) {
        self.position = Point::new(x, self.position.y());
    }

    fn set_y(&mut self, y: i32) {
        self.position = Point::new(self.position.x(), y);
    }
}

impl HasFont for Label {
    fn set_font(&mut self, font: Font) {
        self.font = font;
    }
}

impl HasTextPad for Label {
    fn set_text_pad(&mut self, pad: Insets) {
        self.pad = pad;
    }
}

impl Drawable for Label {
    fn render_to_svg(&self) -> SvgNode {
        svg_element::Text::new("")
            .set("class", self.class.as_str())
            .set("x", self.position.x())
            .set("y", self.position.y() + self.font.height())
            .set("font-family", self.font.family())
            .set("font-size", self.font.height())
            .add(SvgText::new(self.text.as_str()))
            .into()
    }

    fn font_target(&mut self) -> Option<&mut dyn HasFont> {
        Some(self)
    }

    fn text_pad_target(&mut self) -> Option<&mut dyn HasTextPad> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_extent() {
        let label = Label::new("caption text");
        let font = Font::default();
        assert_eq!(label.width(), font.text_width("caption text"));
        assert_eq!(label.height(), font.line_height());
    }

    #[test]
    fn test_empty_label_has_no_width() {
        assert_eq!(Label::new("").width(), 0);
    }

    #[test]
    fn test_render_places_baseline() {
        let mut label = Label::new("hi").with_class("caption");
        label.set_x(3);
        label.set_y(4);
        let rendered = label.render_to_svg().to_string();
        assert!(rendered.contains("class=\"caption\""));
        assert!(rendered.contains(&format!("y=\"{}\"", 4 + Font::default().height())));
        assert!(rendered.contains(">hi<"));
    }
}
