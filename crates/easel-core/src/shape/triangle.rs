use svg::node::element as svg_element;

use crate::{
    geometry::Point,
    shape::{Drawable, Shape, SvgNode},
};

const WIDTH: i32 = 8;
const HEIGHT: i32 = 8;

/// A small right-pointing triangle whose tip sits at its position.
#[derive(Debug, Clone)]
pub struct Triangle {
    tip: Point,
    class: String,
}

impl Triangle {
    pub fn new(x: i32, y: i32, class: impl Into<String>) -> Self {
        Self {
            tip: Point::new(x, y),
            class: class.into(),
        }
    }
}

impl Shape for Triangle {
    fn position(&self) -> Point {
        self.tip
    }

    fn width(&self) -> i32 {
        WIDTH
    }

    fn height(&self) -> i32 {
        HEIGHT
    }

    fn set_x(&mut self, x: i32) {
        self.tip = Point::new(x, self.tip.y());
    }

    fn set_y(&mut self, y: i32) {
        self.tip = Point::new(self.tip.x(), y);
    }

    fn top_left(&self) -> Point {
        Point::new(self.tip.x() - WIDTH, self.tip.y() - HEIGHT / 2)
    }
}

impl Drawable for Triangle {
    fn render_to_svg(&self) -> SvgNode {
        svg_element::Path::new()
            .set("class", self.class.as_str())
            .set(
                "d",
                format!("M{},{} l-8,-4 l 0,8 Z", self.tip.x(), self.tip.y()),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_sit_behind_tip() {
        let triangle = Triangle::new(20, 10, "marker");
        let bounds = triangle.bounds();
        assert_eq!(bounds.min_point(), Point::new(12, 6));
        assert_eq!(bounds.max_x(), 20);
        assert_eq!(bounds.max_y(), 14);
    }

    #[test]
    fn test_render_path() {
        let rendered = Triangle::new(3, 4, "marker").render_to_svg().to_string();
        assert!(rendered.contains("M3,4 l-8,-4 l 0,8 Z"));
        assert!(rendered.contains("class=\"marker\""));
    }
}
