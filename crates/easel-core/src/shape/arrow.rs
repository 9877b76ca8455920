use log::trace;
use svg::node::element as svg_element;

use crate::{
    geometry::{Direction, Heading, Point, arrow_angle, find_bounds_intersection},
    shape::{Drawable, Shape, SvgNode},
};

const TAIL_RADIUS: i32 = 3;

/// A directed connector with a rotated head and an optional tail marker.
#[derive(Debug, Clone)]
pub struct Arrow {
    start: Point,
    end: Point,
    tail: bool,
    class: String,
}

impl Arrow {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            tail: false,
            class: "arrow".to_string(),
        }
    }

    /// Creates an arrow connecting the centers of two shapes, clipped to
    /// the edge of each shape's bounding box.
    pub fn between(from: &dyn Shape, to: &dyn Shape) -> Self {
        let from_center = from.center();
        let to_center = to.center();
        let start = find_bounds_intersection(from.bounds(), to_center);
        let end = find_bounds_intersection(to.bounds(), from_center);
        trace!(start:%, end:%; "Arrow between shapes");
        Self::new(start.x(), start.y(), end.x(), end.y())
    }

    pub fn with_tail(mut self) -> Self {
        self.tail = true;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.class = class.into();
    }

    pub fn set_tail(&mut self, tail: bool) {
        self.tail = tail;
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn has_tail(&self) -> bool {
        self.tail
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Rotation of the head in degrees.
    pub fn angle(&self) -> i32 {
        arrow_angle(self.start, self.end)
    }

    /// Eight-way heading, `None` for a zero-length arrow.
    pub fn heading(&self) -> Option<Heading> {
        Heading::between(self.start, self.end)
    }

    pub fn direction(&self) -> Direction {
        Direction::between(self.start, self.end)
    }

    /// Midpoint between start and end.
    pub fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

impl Shape for Arrow {
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

    fn center(&self) -> Point {
        Arrow::center(self)
    }
}

impl Drawable for Arrow {
    fn render_to_svg(&self) -> SvgNode {
        let (x1, y1) = (self.start.x(), self.start.y());
        let (x2, y2) = (self.end.x(), self.end.y());

        let mut group = svg_element::Group::new().add(
            svg_element::Path::new()
                .set("class", self.class.as_str())
                .set("d", format!("M{x1},{y1} L{x2},{y2}")),
        );

        if self.tail {
            group = group.add(
                svg_element::Circle::new()
                    .set("class", format!("{}-tail", self.class))
                    .set("cx", x1)
                    .set("cy", y1)
                    .set("r", TAIL_RADIUS),
            );
        }

        // Head is drawn pointing right, then rotated around the tip
        let head = svg_element::Path::new()
            .set("class", format!("{}-head", self.class))
            .set("d", format!("M{x2},{y2} l-8,-4 l 0,8 Z"));
        group = group.add(
            svg_element::Group::new()
                .set("transform", format!("rotate({} {x2} {y2})", self.angle()))
                .add(head),
        );

        group.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Frame, Rect};

    #[test]
    fn test_axis_angles() {
        assert_eq!(Arrow::new(0, 0, 10, 0).angle(), 0);
        assert_eq!(Arrow::new(10, 0, 0, 0).angle(), 180);
        assert_eq!(Arrow::new(0, 0, 0, 10).angle(), 90);
        assert_eq!(Arrow::new(0, 10, 0, 0).angle(), -90);
    }

    #[test]
    fn test_direction_is_coarse() {
        assert_eq!(Arrow::new(0, 0, 10, 50).direction(), Direction::LeftToRight);
        assert_eq!(Arrow::new(10, 0, 10, 50).direction(), Direction::RightToLeft);
        assert_eq!(Arrow::new(20, 0, 10, 0).direction(), Direction::RightToLeft);
    }

    #[test]
    fn test_moving_keeps_vector() {
        let mut arrow = Arrow::new(0, 0, 20, 10);
        arrow.set_x(5);
        arrow.set_y(5);
        assert_eq!(arrow.start(), Point::new(5, 5));
        assert_eq!(arrow.end(), Point::new(25, 15));
        assert_eq!(arrow.center(), Point::new(15, 10));
    }

    #[test]
    fn test_between_clips_to_edges() {
        let mut a = Rect::new("a").with_width(40).with_height(20);
        a.set_x(0);
        a.set_y(0);
        let mut b = Rect::new("b").with_width(40).with_height(20);
        b.set_x(100);
        b.set_y(0);

        let arrow = Arrow::between(&a, &b);
        assert_eq!(arrow.start(), Point::new(40, 10));
        assert_eq!(arrow.end(), Point::new(100, 10));
        assert_eq!(arrow.heading(), Some(Heading::Right));
    }

    #[test]
    fn test_between_points_uses_centers() {
        let arrow = Arrow::between(&Frame::point(0, 0), &Frame::point(10, 10));
        assert_eq!(arrow.start(), Point::new(0, 0));
        assert_eq!(arrow.end(), Point::new(10, 10));
        assert_eq!(arrow.angle(), 45);
    }

    #[test]
    fn test_render_tail_and_rotation() {
        let arrow = Arrow::new(0, 0, 0, 10).with_tail().with_class("compose-arrow");
        let rendered = arrow.render_to_svg().to_string();
        assert!(rendered.contains("compose-arrow-tail"));
        assert!(rendered.contains("compose-arrow-head"));
        assert!(rendered.contains("rotate(90 0 10)"));
    }
}
