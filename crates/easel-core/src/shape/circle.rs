use svg::node::element as svg_element;

use crate::{
    geometry::Point,
    shape::{Drawable, Shape, SvgNode},
};

const DOT_RADIUS: i32 = 6;

/// A circle anchored at the top-left corner of its bounding square.
#[derive(Debug, Clone)]
pub struct Circle {
    position: Point,
    radius: i32,
    class: String,
}

impl Circle {
    pub fn new(radius: i32) -> Self {
        Self {
            position: Point::default(),
            radius,
            class: "circle".to_string(),
        }
    }

    /// A small filled circle, e.g. a start state.
    pub fn dot() -> Self {
        Self::new(DOT_RADIUS).with_class("dot")
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Shape for Circle {
    fn position(&self) -> Point {
        self.position
    }

    fn width(&self) -> i32 {
        self.radius * 2
    }

    fn height(&self) -> i32 {
        self.radius * 2
    }

    fn set_x(&mut self, x: i32) {
        self.position = Point::new(x, self.position.y());
    }

    fn set_y(&mut self, y: i32) {
        self.position = Point::new(self.position.x(), y);
    }
}

impl Drawable for Circle {
    fn render_to_svg(&self) -> SvgNode {
        svg_element::Circle::new()
            .set("class", self.class.as_str())
            .set("cx", self.position.x() + self.radius)
            .set("cy", self.position.y() + self.radius)
            .set("r", self.radius)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_is_diameter() {
        let circle = Circle::new(15);
        assert_eq!(circle.width(), 30);
        assert_eq!(circle.height(), 30);
    }

    #[test]
    fn test_center_matches_render() {
        let mut dot = Circle::dot();
        dot.set_x(10);
        dot.set_y(20);
        assert_eq!(dot.center(), Point::new(16, 26));
        let rendered = dot.render_to_svg().to_string();
        assert!(rendered.contains("cx=\"16\""));
        assert!(rendered.contains("class=\"dot\""));
    }
}
