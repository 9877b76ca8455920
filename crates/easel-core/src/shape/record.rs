use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    error::ShapeError,
    geometry::{Insets, Point},
    shape::{Drawable, HasFont, HasTextPad, Shape, SvgNode},
    style::{DEFAULT_TEXT_PAD, Font, box_height, box_width},
};

/// Caller-supplied content of a record: a title plus its member names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDescription {
    pub title: String,
    pub fields: Vec<String>,
    pub methods: Vec<String>,
}

impl RecordDescription {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }
}

/// A box with a title section followed by field and method sections.
#[derive(Debug, Clone)]
pub struct Record {
    position: Point,
    title: String,
    fields: Vec<String>,
    methods: Vec<String>,
    show_fields: bool,
    show_methods: bool,
    font: Font,
    pad: Insets,
    class: String,
}

impl Record {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            position: Point::default(),
            title: title.into(),
            fields: Vec::new(),
            methods: Vec::new(),
            show_fields: true,
            show_methods: true,
            font: Font::default(),
            pad: DEFAULT_TEXT_PAD,
            class: "record".to_string(),
        }
    }

    /// Builds a record from a description, rejecting empty names.
    pub fn from_description(description: RecordDescription) -> Result<Self, ShapeError> {
        if description.title.is_empty() {
            return Err(ShapeError::EmptyName { kind: "record" });
        }
        let mut record = Self::new(description.title);
        for field in description.fields {
            record.add_field(field)?;
        }
        for method in description.methods {
            record.add_method(method)?;
        }
        Ok(record)
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn add_field(&mut self, name: impl Into<String>) -> Result<(), ShapeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ShapeError::EmptyName { kind: "field" });
        }
        self.fields.push(name);
        Ok(())
    }

    pub fn add_method(&mut self, name: impl Into<String>) -> Result<(), ShapeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ShapeError::EmptyName { kind: "method" });
        }
        self.methods.push(name);
        Ok(())
    }

    pub fn hide_fields(&mut self) {
        self.show_fields = false;
    }

    pub fn hide_methods(&mut self) {
        self.show_methods = false;
    }

    /// Hides both member sections.
    pub fn title_only(&mut self) {
        self.hide_fields();
        self.hide_methods();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    fn visible_fields(&self) -> &[String] {
        if self.show_fields { &self.fields } else { &[] }
    }

    fn visible_methods(&self) -> &[String] {
        if self.show_methods { &self.methods } else { &[] }
    }

    fn title_height(&self) -> i32 {
        box_height(&self.font, self.pad, 1)
    }

    fn section_height(&self, lines: &[String]) -> i32 {
        if lines.is_empty() {
            0
        } else {
            box_height(&self.font, self.pad, lines.len())
        }
    }

    fn render_section(
        &self,
        mut group: svg_element::Group,
        lines: &[String],
        top: i32,
    ) -> svg_element::Group {
        let (x, width) = (self.position.x(), self.width());
        group = group.add(
            svg_element::Line::new()
                .set("class", format!("{}-line", self.class))
                .set("x1", x)
                .set("y1", top)
                .set("x2", x + width)
                .set("y2", top),
        );
        let mut baseline = top + self.pad.top() + self.font.height();
        for line in lines {
            group = group.add(self.text(line, baseline, "member"));
            baseline += self.font.line_height();
        }
        group
    }

    fn text(&self, content: &str, baseline: i32, role: &str) -> svg_element::Text {
        svg_element::Text::new("")
            .set("class", format!("{}-{role}", self.class))
            .set("x", self.position.x() + self.pad.left())
            .set("y", baseline)
            .set("font-family", self.font.family())
            .set("font-size", self.font.height())
            .add(SvgText::new(content))
    }
}

impl Shape for Record {
    fn position(&self) -> Point {
        self.position
    }

    fn width(&self) -> i32 {
        std::iter::once(&self.title)
            .chain(self.visible_fields())
            .chain(self.visible_methods())
            .map(|line| box_width(&self.font, self.pad, line))
            .max()
            .unwrap_or(0)
    }

    fn height(&self) -> i32 {
        self.title_height()
            + self.section_height(self.visible_fields())
            + self.section_height(self.visible_methods())
    }

    fn set_x(&mut self, x: i32) {
        self.position = Point::new(x, self.position.y());
    }

    fn set_y(&mut self, y: i32) {
        self.position = Point::new(self.position.x(), y);
    }
}

impl HasFont for Record {
    fn set_font(&mut self, font: Font) {
        self.font = font;
    }
}

impl HasTextPad for Record {
    fn set_text_pad(&mut self, pad: Insets) {
        self.pad = pad;
    }
}

impl Drawable for Record {
    fn render_to_svg(&self) -> SvgNode {
        let (x, y) = (self.position.x(), self.position.y());
        let mut group = svg_element::Group::new()
            .add(
                svg_element::Rectangle::new()
                    .set("class", self.class.as_str())
                    .set("x", x)
                    .set("y", y)
                    .set("width", self.width())
                    .set("height", self.height()),
            )
            .add(self.text(&self.title, y + self.pad.top() + self.font.height(), "title"));

        let mut top = y + self.title_height();
        for section in [self.visible_fields(), self.visible_methods()] {
            if section.is_empty() {
                continue;
            }
            group = self.render_section(group, section, top);
            top += self.section_height(section);
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
