use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    geometry::{Insets, Point},
    shape::{Drawable, HasFont, HasTextPad, Shape, SvgNode},
    style::{DEFAULT_TEXT_PAD, Font, box_height, box_width},
};

/// A titled box sized by its title unless a fixed extent is given.
#[derive(Debug, Clone)]
pub struct Rect {
    position: Point,
    title: String,
    font: Font,
    pad: Insets,
    class: String,
    fixed_width: Option<i32>,
    fixed_height: Option<i32>,
}

impl Rect {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            position: Point::default(),
            title: title.into(),
            font: Font::default(),
            pad: DEFAULT_TEXT_PAD,
            class: "rect".to_string(),
            fixed_width: None,
            fixed_height: None,
        }
    }

    /// Overrides the measured width.
    pub fn with_width(mut self, width: i32) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Overrides the measured height.
    pub fn with_height(mut self, height: i32) -> Self {
        self.fixed_height = Some(height);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.class = class.into();
    }

    pub fn set_width(&mut self, width: i32) {
        self.fixed_width = Some(width);
    }

    pub fn title(&self) -> &str {
        &self.title
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

impl Shape for Rect {
    fn position(&self) -> Point {
        self.position
    }

    fn width(&self) -> i32 {
        self.fixed_width
            .unwrap_or_else(|| box_width(&self.font, self.pad, &self.title))
    }

    fn height(&self) -> i32 {
        self.fixed_height
            .unwrap_or_else(|| box_height(&self.font, self.pad, 1))
    }

    fn set_x(&mut self, x: i32) {
        self.position = Point::new(x, self.position.y());
    }

    fn set_y(&mut self, y: i32) {
        self.position = Point::new(self.position.x(), y);
    }
}

impl HasFont for Rect {
    fn set_font(&mut self, font: Font) {
        self.font = font;
    }
}

impl HasTextPad for Rect {
    fn set_text_pad(&mut self, pad: Insets) {
        self.pad = pad;
    }
}

impl Drawable for Rect {
    fn render_to_svg(&self) -> SvgNode {
        let (x, y) = (self.position.x(), self.position.y());
        let mut group = svg_element::Group::new().add(
            svg_element::Rectangle::new()
                .set("class", self.class.as_str())
                .set("x", x)
                .set("y", y)
                .set("width", self.width())
                .set("height", self.height()),
        );

        if !self.title.is_empty() {
            group = group.add(
                svg_element::Text::new("")
                    .set("class", format!("{}-title", self.class))
                    .set("x", x + self.pad.left())
                    .set("y", y + self.pad.top() + self.font.height())
                    .set("font-family", self.font.family())
                    .set("font-size", self.font.height())
                    .add(SvgText::new(self.title.as_str())),
            );
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
