use svg::node::element as svg_element;

use crate::{
    geometry::{Direction, Point},
    shape::{Drawable, Shape, SvgNode},
};

/// A straight line segment.
///
/// The start point is the anchor: moving the line moves both endpoints by
/// the same offset.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point,
    end: Point,
    class: String,
}

impl Line {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            class: "line".to_string(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.class = class.into();
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn direction(&self) -> Direction {
        Direction::between(self.start, self.end)
    }
}

impl Shape for Line {
    fn position(&self) -> Point {
        self.start
    }

    fn width(&self) -> i32 {
        (self.start.x() - self.end.x()).abs()
    }

    fn height(&self) -> i32 {
        (self.start.y() - self.end.y()).abs()
    }

    fn set_x(&mut self, x: i32) {
        let dx = x - self.start.x();
        self.start = Point::new(x, self.start.y());
        self.end = Point::new(self.end.x() + dx, self.end.y());
    }

    fn set_y(&mut self, y: i32) {
        let dy = y - self.start.y();
        self.start = Point::new(self.start.x(), y);
        self.end = Point::new(self.end.x(), self.end.y() + dy);
    }

    fn top_left(&self) -> Point {
        self.start.min(self.end)
    }
}

impl Drawable for Line {
    fn render_to_svg(&self) -> SvgNode {
        svg_element::Line::new()
            .set("class", self.class.as_str())
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_keeps_vector() {
        let mut line = Line::new(10, 10, 40, 0);
        line.set_x(0);
        line.set_y(100);
        assert_eq!(line.start(), Point::new(0, 100));
        assert_eq!(line.end(), Point::new(30, 90));
        assert_eq!(line.width(), 30);
        assert_eq!(line.height(), 10);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Line::new(0, 0, 5, 0).direction(), Direction::LeftToRight);
        assert_eq!(Line::new(5, 0, 0, 0).direction(), Direction::RightToLeft);
    }

    #[test]
    fn test_top_left_is_min_corner() {
        assert_eq!(Line::new(8, 2, 3, 9).top_left(), Point::new(3, 2));
    }
}
