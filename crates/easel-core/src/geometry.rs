//! Integer geometry primitives shared by shapes and the layout engine.
//!
//! All coordinates are in canvas units with the origin at the top-left
//! corner and the Y axis growing downwards.

use std::{cmp::Ordering, f64::consts::PI};

use serde::Deserialize;

/// A position on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns true if this point lies strictly left of `other`.
    pub fn left_of(self, other: Point) -> bool {
        self.x < other.x
    }

    /// Returns true if this point lies strictly right of `other`.
    pub fn right_of(self, other: Point) -> bool {
        self.x > other.x
    }

    /// Returns true if this point lies strictly above `other`.
    pub fn above(self, other: Point) -> bool {
        self.y < other.y
    }

    /// Returns true if this point lies strictly below `other`.
    pub fn below(self, other: Point) -> bool {
        self.y > other.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }

    /// Returns the component-wise minimum of two points.
    pub fn min(self, other: Point) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size with padding added to both width and height
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> i32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> i32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> i32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> i32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> i32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> i32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the center of the bounds, rounded towards the top-left.
    pub fn center(self) -> Point {
        Point::new(
            self.min_x + self.width() / 2,
            self.min_y + self.height() / 2,
        )
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns true if `point` lies inside or on the edge of the bounds.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Returns true if `point` lies on one of the four edges.
    pub fn on_edge(&self, point: Point) -> bool {
        self.contains(point)
            && (point.x == self.min_x
                || point.x == self.max_x
                || point.y == self.min_y
                || point.y == self.max_y)
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Insets {
    #[serde(default)]
    top: i32,
    #[serde(default)]
    right: i32,
    #[serde(default)]
    bottom: i32,
    #[serde(default)]
    left: i32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> i32 {
        self.top
    }

    pub fn right(self) -> i32 {
        self.right
    }

    pub fn bottom(self) -> i32 {
        self.bottom
    }

    pub fn left(self) -> i32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> i32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> i32 {
        self.top + self.bottom
    }
}

/// Coarse horizontal direction of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Start left of end is left-to-right, everything else right-to-left.
    pub fn between(start: Point, end: Point) -> Self {
        if start.left_of(end) {
            Self::LeftToRight
        } else {
            Self::RightToLeft
        }
    }
}

/// Eight-way classification of the vector from a start to an end point.
///
/// The diagonal variants are the quadrants counted clockwise from the
/// bottom-right one, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Right,
    Left,
    Down,
    Up,
    /// Q1
    DownRight,
    /// Q2
    DownLeft,
    /// Q3
    UpLeft,
    /// Q4
    UpRight,
}

impl Heading {
    /// Classifies the heading from `start` to `end`.
    ///
    /// Returns `None` when both points coincide.
    pub fn between(start: Point, end: Point) -> Option<Self> {
        use Ordering::{Equal, Greater, Less};

        let heading = match (start.x.cmp(&end.x), start.y.cmp(&end.y)) {
            (Less, Equal) => Self::Right,
            (Greater, Equal) => Self::Left,
            (Equal, Less) => Self::Down,
            (Equal, Greater) => Self::Up,
            (Less, Less) => Self::DownRight,
            (Greater, Less) => Self::DownLeft,
            (Greater, Greater) => Self::UpLeft,
            (Less, Greater) => Self::UpRight,
            (Equal, Equal) => return None,
        };
        Some(heading)
    }

    /// Returns true for headings along the X axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }

    /// Returns true for headings along the Y axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Down | Self::Up)
    }
}

/// Rotation in degrees for an arrowhead drawn pointing right, so that it
/// points from `start` towards `end`.
///
/// Axis-aligned headings take a fixed angle and never divide; diagonal ones
/// compute the angle from the quadrant's positive deltas.
pub fn arrow_angle(start: Point, end: Point) -> i32 {
    let Some(heading) = Heading::between(start, end) else {
        return 0;
    };

    let delta = |a: i32, b: i32| f64::from(a) / f64::from(b);
    match heading {
        Heading::Right => 0,
        Heading::Left => 180,
        Heading::Down => 90,
        Heading::Up => -90,
        Heading::DownRight => radians_to_degrees(
            delta(end.y - start.y, end.x - start.x).atan(),
        ),
        Heading::DownLeft => {
            180 - radians_to_degrees(delta(end.y - start.y, start.x - end.x).atan())
        }
        Heading::UpLeft => {
            radians_to_degrees(delta(start.y - end.y, start.x - end.x).atan()) + 180
        }
        Heading::UpRight => -radians_to_degrees(delta(start.y - end.y, end.x - start.x).atan()),
    }
}

/// Converts radians to whole degrees, rounding to the nearest degree.
pub fn radians_to_degrees(radians: f64) -> i32 {
    (radians * 180.0 / PI).round() as i32
}

/// Finds where the ray from the center of `bounds` towards `target` leaves
/// the bounds.
///
/// Returns `target` itself when the ray has no length or the bounds are
/// degenerate.
pub fn find_bounds_intersection(bounds: Bounds, target: Point) -> Point {
    let half_width = f64::from(bounds.width()) / 2.0;
    let half_height = f64::from(bounds.height()) / 2.0;
    let center_x = f64::from(bounds.min_x) + half_width;
    let center_y = f64::from(bounds.min_y) + half_height;

    let dx = f64::from(target.x) - center_x;
    let dy = f64::from(target.y) - center_y;
    if dx == 0.0 && dy == 0.0 {
        return target;
    }
    if half_width == 0.0 && half_height == 0.0 {
        return bounds.center();
    }

    // Scale factor needed to reach each pair of edges along the ray
    let tx = if dx != 0.0 {
        half_width / dx.abs()
    } else {
        f64::INFINITY
    };
    let ty = if dy != 0.0 {
        half_height / dy.abs()
    } else {
        f64::INFINITY
    };
    let t = tx.min(ty);
    if !t.is_finite() {
        return target;
    }

    let x = dx.mul_add(t, center_x).round() as i32;
    let y = dy.mul_add(t, center_y).round() as i32;
    Point::new(
        x.clamp(bounds.min_x, bounds.max_x),
        y.clamp(bounds.min_y, bounds.max_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_predicates() {
        let a = Point::new(0, 0);
        let b = Point::new(10, 5);
        assert!(a.left_of(b));
        assert!(b.right_of(a));
        assert!(a.above(b));
        assert!(b.below(a));
        assert!(!a.left_of(a));
        assert!(!a.above(a));
    }

    #[test]
    fn test_point_predicates_use_single_coordinate() {
        let a = Point::new(0, 100);
        let b = Point::new(10, 0);
        assert!(a.left_of(b));
        assert!(a.below(b));
        assert!(!a.above(b));
    }

    #[test]
    fn test_point_arithmetic() {
        let p1 = Point::new(5, 8);
        let p2 = Point::new(2, 3);
        assert_eq!(p1.add_point(p2), Point::new(7, 11));
        assert_eq!(p1.sub_point(p2), Point::new(3, 5));
        assert_eq!(Point::new(0, 0).midpoint(Point::new(4, 6)), Point::new(2, 3));
        assert_eq!(p1.min(Point::new(9, 1)), Point::new(5, 1));
    }

    #[test]
    fn test_size_add_padding() {
        let padded = Size::new(10, 20).add_padding(Insets::new(1, 2, 3, 4));
        assert_eq!(padded, Size::new(16, 24));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10, 10), Size::new(50, 20));
        assert_eq!(bounds.max_x(), 60);
        assert_eq!(bounds.max_y(), 30);
        assert_eq!(bounds.width(), 50);
        assert_eq!(bounds.height(), 20);
        assert_eq!(bounds.center(), Point::new(35, 20));
    }

    #[test]
    fn test_bounds_merge() {
        let a = Bounds::new_from_top_left(Point::new(1, 2), Size::new(4, 4));
        let b = Bounds::new_from_top_left(Point::new(3, 0), Size::new(5, 4));
        let merged = a.merge(&b);
        assert_eq!(merged.min_point(), Point::new(1, 0));
        assert_eq!(merged.max_x(), 8);
        assert_eq!(merged.max_y(), 6);
    }

    #[test]
    fn test_heading_axis_aligned() {
        let origin = Point::new(0, 0);
        assert_eq!(Heading::between(origin, Point::new(100, 0)), Some(Heading::Right));
        assert_eq!(Heading::between(Point::new(100, 0), origin), Some(Heading::Left));
        assert_eq!(Heading::between(origin, Point::new(0, 100)), Some(Heading::Down));
        assert_eq!(Heading::between(Point::new(0, 100), origin), Some(Heading::Up));
        assert_eq!(Heading::between(origin, origin), None);
    }

    #[test]
    fn test_heading_quadrants() {
        let c = Point::new(50, 50);
        assert_eq!(Heading::between(c, Point::new(60, 60)), Some(Heading::DownRight));
        assert_eq!(Heading::between(c, Point::new(40, 60)), Some(Heading::DownLeft));
        assert_eq!(Heading::between(c, Point::new(40, 40)), Some(Heading::UpLeft));
        assert_eq!(Heading::between(c, Point::new(60, 40)), Some(Heading::UpRight));
    }

    #[test]
    fn test_arrow_angle_axis_aligned() {
        assert_eq!(arrow_angle(Point::new(0, 0), Point::new(100, 0)), 0);
        assert_eq!(arrow_angle(Point::new(100, 0), Point::new(0, 0)), 180);
        assert_eq!(arrow_angle(Point::new(0, 0), Point::new(0, 100)), 90);
        assert_eq!(arrow_angle(Point::new(0, 100), Point::new(0, 0)), -90);
    }

    #[test]
    fn test_arrow_angle_quadrants() {
        let c = Point::new(100, 100);
        assert_eq!(arrow_angle(Point::new(0, 0), Point::new(100, 100)), 45);
        assert_eq!(arrow_angle(c, Point::new(0, 200)), 135);
        assert_eq!(arrow_angle(c, Point::new(0, 0)), 225);
        assert_eq!(arrow_angle(c, Point::new(200, 0)), -45);
    }

    #[test]
    fn test_arrow_angle_shallow_slope() {
        // atan(1/2) is 26.57 degrees
        assert_eq!(arrow_angle(Point::new(0, 0), Point::new(200, 100)), 27);
    }

    #[test]
    fn test_arrow_angle_same_point() {
        assert_eq!(arrow_angle(Point::new(7, 7), Point::new(7, 7)), 0);
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(
            Direction::between(Point::new(0, 0), Point::new(1, 50)),
            Direction::LeftToRight
        );
        assert_eq!(
            Direction::between(Point::new(5, 0), Point::new(5, 50)),
            Direction::RightToLeft
        );
    }

    #[test]
    fn test_intersection_from_right() {
        let bounds = Bounds::new_from_top_left(Point::new(80, 80), Size::new(40, 40));
        let result = find_bounds_intersection(bounds, Point::new(200, 100));
        assert_eq!(result, Point::new(120, 100));
    }

    #[test]
    fn test_intersection_from_top() {
        let bounds = Bounds::new_from_top_left(Point::new(80, 80), Size::new(40, 40));
        let result = find_bounds_intersection(bounds, Point::new(100, 0));
        assert_eq!(result, Point::new(100, 80));
    }

    #[test]
    fn test_intersection_diagonal_hits_corner() {
        let bounds = Bounds::new_from_top_left(Point::new(80, 80), Size::new(40, 40));
        let result = find_bounds_intersection(bounds, Point::new(200, 200));
        assert_eq!(result, Point::new(120, 120));
    }

    #[test]
    fn test_intersection_target_at_center() {
        let bounds = Bounds::new_from_top_left(Point::new(80, 80), Size::new(40, 40));
        let result = find_bounds_intersection(bounds, Point::new(100, 100));
        assert_eq!(result, Point::new(100, 100));
    }

    #[test]
    fn test_intersection_zero_size() {
        let bounds = Bounds::new_from_top_left(Point::new(100, 100), Size::default());
        let result = find_bounds_intersection(bounds, Point::new(200, 100));
        assert_eq!(result, Point::new(100, 100));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Point::new(x, y))
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (point_strategy(), 0i32..500, 0i32..500)
            .prop_map(|(p, w, h)| Bounds::new_from_top_left(p, Size::new(w, h)))
    }

    proptest! {
        #[test]
        fn angle_is_within_one_turn(a in point_strategy(), b in point_strategy()) {
            let angle = arrow_angle(a, b);
            prop_assert!((-90..=270).contains(&angle), "angle {angle} out of range");
        }

        #[test]
        fn heading_exists_for_distinct_points(a in point_strategy(), b in point_strategy()) {
            prop_assert_eq!(Heading::between(a, b).is_some(), a != b);
        }

        #[test]
        fn intersection_lands_on_edge(bounds in bounds_strategy(), target in point_strategy()) {
            prop_assume!(!bounds.contains(target));
            let result = find_bounds_intersection(bounds, target);
            prop_assert!(bounds.on_edge(result), "{result:?} not on edge of {bounds:?}");
        }
    }
}
