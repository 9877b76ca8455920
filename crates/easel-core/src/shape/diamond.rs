use svg::node::element as svg_element;

use crate::{
    geometry::Point,
    shape::{Drawable, Shape, SvgNode},
};

const DEFAULT_EXTENT: i32 = 20;

/// A rhombus inscribed in its bounding box, e.g. a decision point.
#[derive(Debug, Clone)]
pub struct Diamond {
    position: Point,
    width: i32,
    height: i32,
    class: String,
}

impl Diamond {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_EXTENT, DEFAULT_EXTENT)
    }

    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            position: Point::default(),
            width,
            height,
            class: "diamond".to_string(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Default for Diamond {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Diamond {
    fn position(&self) -> Point {
        self.position
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_x(&mut self, x: i32) {
        self.position = Point::new(x, self.position.y());
    }

    fn set_y(&mut self, y: i32) {
        self.position = Point::new(self.position.x(), y);
    }
}

impl Drawable for Diamond {
    fn render_to_svg(&self) -> SvgNode {
        let (x, y) = (self.position.x(), self.position.y());
        let (hw, hh) = (self.width / 2, self.height / 2);
        svg_element::Path::new()
            .set("class", self.class.as_str())
            .set(
                "d",
                format!("M{},{y} l{hw},{hh} l-{hw},{hh} l-{hw},-{hh} Z", x + hw),
            )
            .into()
    }
}
