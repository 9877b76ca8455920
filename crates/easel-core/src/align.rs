//! Alignment of shapes against the first shape of a set.
//!
//! Vertical alignments move shapes along the Y axis, horizontal ones along
//! the X axis. The first shape is the reference and is never moved. All
//! alignments are idempotent.

use log::trace;

use crate::shape::{Frame, Shape};

/// A set of shapes aligned against its first member.
#[derive(Debug)]
pub struct Aligner<'a> {
    shapes: Vec<&'a mut dyn Shape>,
}

impl<'a> Aligner<'a> {
    pub fn new(shapes: Vec<&'a mut dyn Shape>) -> Self {
        Self { shapes }
    }

    /// Centers every shape vertically on the reference.
    pub fn v_align_center(self) {
        self.align(|shape, reference| {
            let offset = (reference.height() - shape.height()) / 2;
            shape.set_y(reference.position().y() + offset);
        });
    }

    pub fn v_align_top(self) {
        self.align(|shape, reference| shape.set_y(reference.position().y()));
    }

    pub fn v_align_bottom(self) {
        self.align(|shape, reference| {
            shape.set_y(reference.position().y() + reference.height() - shape.height());
        });
    }

    /// Centers every shape horizontally on the reference.
    pub fn h_align_center(self) {
        self.align(|shape, reference| {
            let offset = (reference.width() - shape.width()) / 2;
            shape.set_x(reference.position().x() + offset);
        });
    }

    pub fn h_align_left(self) {
        self.align(|shape, reference| shape.set_x(reference.position().x()));
    }

    pub fn h_align_right(self) {
        self.align(|shape, reference| {
            shape.set_x(reference.position().x() + reference.width() - shape.width());
        });
    }

    fn align<F>(self, place: F)
    where
        F: Fn(&mut dyn Shape, &Frame),
    {
        let mut shapes = self.shapes.into_iter();
        let Some(first) = shapes.next() else {
            return;
        };
        let reference = Frame::of(&*first);
        for shape in shapes {
            place(&mut *shape, &reference);
            trace!(position:% = shape.position(); "Aligned shape");
        }
    }
}
