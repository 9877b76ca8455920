//! Relative placement of shapes.
//!
//! An [`Adjuster`] wraps the shapes to move and applies exactly one
//! directive to all of them. Directives that place shapes next to a
//! reference chain: the first shape is placed relative to the reference,
//! every following shape relative to the one placed before it.
//!
//! The reference is only ever borrowed immutably, so a directive cannot
//! move it.

use log::trace;

use crate::{
    shape::{Frame, Shape},
    style::DEFAULT_SPACING,
};

/// A set of shapes waiting for a placement directive.
#[derive(Debug)]
pub struct Adjuster<'a> {
    shapes: Vec<&'a mut dyn Shape>,
    spacing: i32,
}

impl<'a> Adjuster<'a> {
    pub fn new(shapes: Vec<&'a mut dyn Shape>) -> Self {
        Self {
            shapes,
            spacing: DEFAULT_SPACING,
        }
    }

    /// Sets the gap used by directives called without an explicit one.
    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    /// Moves every shape to `(x, y)`.
    pub fn at(self, x: i32, y: i32) {
        trace!(x, y, count = self.shapes.len(); "Placing shapes at position");
        for shape in self.shapes {
            shape.set_x(x);
            shape.set_y(y);
        }
    }

    /// Places the shapes in a row to the right of `reference`.
    pub fn right_of(self, reference: &dyn Shape) {
        let gap = self.spacing;
        self.right_of_with_gap(reference, gap);
    }

    pub fn right_of_with_gap(self, reference: &dyn Shape, gap: i32) {
        self.chain(reference, |shape, reference| {
            shape.set_x(reference.position().x() + reference.width() + gap);
            shape.set_y(reference.position().y());
        });
    }

    /// Places the shapes in a row to the left of `reference`.
    pub fn left_of(self, reference: &dyn Shape) {
        let gap = self.spacing;
        self.left_of_with_gap(reference, gap);
    }

    pub fn left_of_with_gap(self, reference: &dyn Shape, gap: i32) {
        self.chain(reference, |shape, reference| {
            shape.set_x(reference.position().x() - shape.width() - gap);
            shape.set_y(reference.position().y());
        });
    }

    /// Places the shapes in a column below `reference`.
    pub fn below(self, reference: &dyn Shape) {
        let gap = self.spacing;
        self.below_with_gap(reference, gap);
    }

    pub fn below_with_gap(self, reference: &dyn Shape, gap: i32) {
        self.chain(reference, |shape, reference| {
            shape.set_x(reference.position().x());
            shape.set_y(reference.position().y() + reference.height() + gap);
        });
    }

    /// Places the shapes in a column above `reference`.
    pub fn above(self, reference: &dyn Shape) {
        let gap = self.spacing;
        self.above_with_gap(reference, gap);
    }

    pub fn above_with_gap(self, reference: &dyn Shape, gap: i32) {
        self.chain(reference, |shape, reference| {
            shape.set_x(reference.position().x());
            shape.set_y(reference.position().y() - shape.height() - gap);
        });
    }

    fn chain<F>(self, reference: &dyn Shape, place: F)
    where
        F: Fn(&mut dyn Shape, &Frame),
    {
        let mut previous = Frame::of(reference);
        for shape in self.shapes {
            place(&mut *shape, &previous);
            trace!(position:% = shape.position(); "Placed shape");
            previous = Frame::of(&*shape);
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::shape::Rect;

    // ===================
    // Strategies
    // ===================

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-1000i32..1000, -1000i32..1000, 0i32..300, 0i32..300).prop_map(|(x, y, w, h)| {
            let mut rect = Rect::new("").with_width(w).with_height(h);
            rect.set_x(x);
            rect.set_y(y);
            rect
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Right-of keeps the row and starts one gap past the reference.
    fn check_right_of(reference: Rect, mut shape: Rect, gap: i32) -> Result<(), TestCaseError> {
        let before = Frame::of(&reference);
        Adjuster::new(vec![&mut shape]).right_of_with_gap(&reference, gap);

        prop_assert_eq!(
            shape.position().x(),
            reference.position().x() + reference.width() + gap
        );
        prop_assert_eq!(shape.position().y(), reference.position().y());
        prop_assert_eq!(Frame::of(&reference), before);
        Ok(())
    }

    /// Below keeps the column and starts one gap past the reference.
    fn check_below(reference: Rect, mut shape: Rect, gap: i32) -> Result<(), TestCaseError> {
        let before = Frame::of(&reference);
        Adjuster::new(vec![&mut shape]).below_with_gap(&reference, gap);

        prop_assert_eq!(shape.position().x(), reference.position().x());
        prop_assert_eq!(
            shape.position().y(),
            reference.position().y() + reference.height() + gap
        );
        prop_assert_eq!(Frame::of(&reference), before);
        Ok(())
    }

    /// The second shape of a chain is placed relative to the first.
    fn check_below_chains(
        reference: Rect,
        mut first: Rect,
        mut second: Rect,
        gap: i32,
    ) -> Result<(), TestCaseError> {
        Adjuster::new(vec![&mut first, &mut second]).below_with_gap(&reference, gap);

        prop_assert_eq!(second.position().x(), first.position().x());
        prop_assert_eq!(
            second.position().y(),
            first.position().y() + first.height() + gap
        );
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn right_of_formula(reference in rect_strategy(), shape in rect_strategy(), gap in 0i32..100) {
            check_right_of(reference, shape, gap)?;
        }

        #[test]
        fn below_formula(reference in rect_strategy(), shape in rect_strategy(), gap in 0i32..100) {
            check_below(reference, shape, gap)?;
        }

        #[test]
        fn below_chains(
            reference in rect_strategy(),
            first in rect_strategy(),
            second in rect_strategy(),
            gap in 0i32..100,
        ) {
            check_below_chains(reference, first, second, gap)?;
        }
    }
}
