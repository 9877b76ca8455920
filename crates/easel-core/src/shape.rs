//! Shape capability traits and the built-in shape catalogue.
//!
//! Layout only ever talks to the [`Shape`] trait: a position, an extent and
//! two setters. Rendering and style capabilities live on [`Drawable`], which
//! every shape stored on a diagram implements. Optional capabilities such as
//! [`HasFont`] are queried through `Drawable` instead of being required.

use std::fmt;

use crate::{
    geometry::{Bounds, Insets, Point, Size},
    style::Font,
};

mod arrow;
mod circle;
mod diamond;
mod label;
mod line;
mod note;
mod record;
mod rect;
mod triangle;

pub use arrow::Arrow;
pub use circle::Circle;
pub use diamond::Diamond;
pub use label::Label;
pub use line::Line;
pub use note::Note;
pub use record::{Record, RecordDescription};
pub use rect::Rect;
pub use triangle::Triangle;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// The capability set every placeable entity exposes to the layout engine.
pub trait Shape: fmt::Debug {
    /// Anchor position of the shape. Layout directives read and write this
    /// point; for most shapes it is the top-left corner.
    fn position(&self) -> Point;

    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn set_x(&mut self, x: i32);

    fn set_y(&mut self, y: i32);

    /// Top-left corner of the bounding box.
    ///
    /// Line-like shapes anchor at their start point, which is not
    /// necessarily the top-left corner, and override this.
    fn top_left(&self) -> Point {
        self.position()
    }

    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Bounding box of the shape on the canvas.
    fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.top_left(), self.size())
    }

    /// Center of the bounding box.
    fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// Shapes whose text can be restyled with a diagram font.
pub trait HasFont {
    fn set_font(&mut self, font: Font);
}

/// Shapes with padding between their outline and their text.
pub trait HasTextPad {
    fn set_text_pad(&mut self, pad: Insets);
}

/// Views any sized shape as a `dyn Shape`.
pub trait AsShape {
    fn as_shape(&self) -> &dyn Shape;

    fn as_shape_mut(&mut self) -> &mut dyn Shape;
}

impl<T: Shape> AsShape for T {
    fn as_shape(&self) -> &dyn Shape {
        self
    }

    fn as_shape_mut(&mut self) -> &mut dyn Shape {
        self
    }
}

/// A shape that can be rendered onto a diagram.
pub trait Drawable: Shape + AsShape {
    /// Renders this shape at its current position.
    fn render_to_svg(&self) -> SvgNode;

    /// Returns the font capability if the shape supports it.
    fn font_target(&mut self) -> Option<&mut dyn HasFont> {
        None
    }

    /// Returns the text padding capability if the shape supports it.
    fn text_pad_target(&mut self) -> Option<&mut dyn HasTextPad> {
        None
    }
}

/// Position and extent of a shape captured at one point in time.
///
/// Layout directives take their reference as a `Frame` snapshot, so the
/// reference is never borrowed mutably while the moved shapes are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    position: Point,
    size: Size,
}

impl Frame {
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Captures the current position and extent of `shape`.
    pub fn of(shape: &dyn Shape) -> Self {
        Self::new(shape.position(), shape.size())
    }

    /// A zero-sized frame, i.e. a single point.
    pub fn point(x: i32, y: i32) -> Self {
        Self::new(Point::new(x, y), Size::default())
    }
}

impl Shape for Frame {
    fn position(&self) -> Point {
        self.position
    }

    fn width(&self) -> i32 {
        self.size.width()
    }

    fn height(&self) -> i32 {
        self.size.height()
    }

    fn set_x(&mut self, x: i32) {
        self.position = Point::new(x, self.position.y());
    }

    fn set_y(&mut self, y: i32) {
        self.position = Point::new(self.position.x(), y);
    }
}
