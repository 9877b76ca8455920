use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    geometry::{Insets, Point},
    shape::{Drawable, HasFont, HasTextPad, Shape, SvgNode},
    style::{DEFAULT_TEXT_PAD, Font, box_height, box_width},
};

const FOLD: i32 = 10;

/// Multi-line text in a box with a folded top-right corner.
#[derive(Debug, Clone)]
pub struct Note {
    position: Point,
    text: String,
    font: Font,
    pad: Insets,
    class: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            position: Point::default(),
            text: text.into(),
            font: Font::default(),
            pad: DEFAULT_TEXT_PAD,
            class: "note".to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn line_count(&self) -> usize {
        self.text.lines().count().max(1)
    }
}

impl Shape for Note {
    fn position(&self) -> Point {
        self.position
    }

    fn width(&self) -> i32 {
        box_width(&self.font, self.pad, &self.text) + FOLD
    }

    fn height(&self) -> i32 {
        box_height(&self.font, self.pad, self.line_count())
    }

    fn set_x(&mut self, x: i32) {
        self.position = Point::new(x, self.position.y());
    }

    fn set_y(&mut self, y: i32) {
        self.position = Point::new(self.position.x(), y);
    }
}

impl HasFont for Note {
    fn set_font(&mut self, font: Font) {
        self.font = font;
    }
}

impl HasTextPad for Note {
    fn set_text_pad(&mut self, pad: Insets) {
        self.pad = pad;
    }
}

impl Drawable for Note {
    fn render_to_svg(&self) -> SvgNode {
        let (x, y) = (self.position.x(), self.position.y());
        let (w, h) = (self.width(), self.height());
        let outline = format!(
            "M{x},{y} l{},0 l{FOLD},{FOLD} l0,{} l-{w},0 Z",
            w - FOLD,
            h - FOLD
        );
        let corner = format!("M{},{y} l0,{FOLD} l{FOLD},0", x + w - FOLD);

        let mut group = svg_element::Group::new()
            .add(
                svg_element::Path::new()
                    .set("class", self.class.as_str())
                    .set("d", outline),
            )
            .add(
                svg_element::Path::new()
                    .set("class", format!("{}-fold", self.class))
                    .set("d", corner),
            );

        let mut baseline = y + self.pad.top() + self.font.height();
        for line in self.text.lines() {
            group = group.add(
                svg_element::Text::new("")
                    .set("class", format!("{}-text", self.class))
                    .set("x", x + self.pad.left())
                    .set("y", baseline)
                    .set("font-family", self.font.family())
                    .set("font-size", self.font.height())
                    .add(SvgText::new(line)),
            );
            baseline += self.font.line_height();
        }

        group.into()
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
    fn test_height_grows_with_lines() {
        let one = Note::new("single");
        let three = Note::new("first\nsecond\nthird");
        let line_height = Font::default().line_height();
        assert_eq!(three.height() - one.height(), 2 * line_height);
    }

    #[test]
    fn test_empty_note_keeps_one_line() {
        assert_eq!(Note::new("").height(), Note::new("x").height());
    }

    #[test]
    fn test_render_one_text_per_line() {
        let rendered = Note::new("a\nb").render_to_svg().to_string();
        assert_eq!(rendered.matches("note-text").count(), 2);
        assert!(rendered.contains("note-fold"));
    }
}
