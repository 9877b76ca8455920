//! The diagram canvas.
//!
//! A [`Diagram`] owns its shapes in insertion order, which is also the
//! painting order. Shapes are addressed through the [`ShapeId`] handles
//! returned when they are added, and positioned through [`Adjust`] and
//! [`Placement`] values that forward to the core layout primitives.

use std::num::NonZeroUsize;

use indexmap::IndexMap;
use log::{debug, trace};

use easel_core::{
    adjust::Adjuster,
    align::Aligner,
    geometry::{Heading, Insets, Size},
    shape::{Arrow, Drawable, Frame, Label, Rect, Shape},
    style::Style,
};

/// Vertical distance between the content and the caption or legend.
const ANNOTATION_MARGIN: i32 = 10;
const LEGEND_X: i32 = 8;
const LEGEND_SWATCH: i32 = 10;
const LEGEND_ROW_HEIGHT: i32 = 20;

/// Handle of a shape stored on a [`Diagram`].
///
/// Handles are only meaningful for the diagram that issued them; using one
/// with another diagram panics like an out-of-bounds index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    /// Position of the shape in the painting order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Something a placement directive can be relative to.
pub trait Anchor {
    /// Snapshot of the anchor's position and extent.
    fn frame(&self, diagram: &Diagram) -> Frame;
}

impl Anchor for ShapeId {
    fn frame(&self, diagram: &Diagram) -> Frame {
        Frame::of(diagram.shape(*self).as_shape())
    }
}

impl Anchor for Frame {
    fn frame(&self, _diagram: &Diagram) -> Frame {
        *self
    }
}

/// A canvas of shapes with a caption and a legend.
#[derive(Debug, Default)]
pub struct Diagram {
    style: Style,
    shapes: Vec<Box<dyn Drawable>>,
    size: Size,
    caption: Option<String>,
    legend: IndexMap<String, String>,
}

impl Diagram {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Adds a shape on top of the existing ones.
    ///
    /// Shapes supporting a font or text padding take the diagram's.
    pub fn add<S: Drawable + 'static>(&mut self, shape: S) -> ShapeId {
        self.add_boxed(Box::new(shape))
    }

    pub fn add_boxed(&mut self, mut shape: Box<dyn Drawable>) -> ShapeId {
        self.apply_style(shape.as_mut());
        let id = ShapeId(self.shapes.len());
        trace!(id = id.0, shape:?; "Adding shape");
        self.shapes.push(shape);
        id
    }

    /// Adds a shape and returns a placement for positioning it.
    pub fn place<S: Drawable + 'static>(&mut self, shape: S) -> Placement<'_> {
        let id = self.add(shape);
        Placement {
            id,
            adjust: self.adjust(&[id]),
        }
    }

    /// Starts a placement directive for shapes already on the diagram.
    pub fn adjust(&mut self, ids: &[ShapeId]) -> Adjust<'_> {
        let spacing = self.style.spacing();
        Adjust {
            diagram: self,
            ids: ids.to_vec(),
            spacing,
        }
    }

    /// Returns the shape behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this diagram.
    pub fn shape(&self, id: ShapeId) -> &dyn Drawable {
        &*self.shapes[id.0]
    }

    pub fn get(&self, id: ShapeId) -> Option<&dyn Drawable> {
        self.shapes.get(id.0).map(|shape| &**shape)
    }

    /// Shapes in painting order.
    pub fn shapes(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.shapes.iter().map(|shape| &**shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Places `shapes` in a grid with `columns` columns starting at `(x, y)`.
    ///
    /// The first row is laid out left to right. Every later shape goes below
    /// the tallest shape of the previous row, centered on the shape above it
    /// in the same column.
    pub fn place_grid(
        &mut self,
        columns: NonZeroUsize,
        x: i32,
        y: i32,
        shapes: Vec<Box<dyn Drawable>>,
    ) -> Vec<ShapeId> {
        let columns = columns.get();
        let mut ids: Vec<ShapeId> = Vec::with_capacity(shapes.len());
        let mut row: Vec<ShapeId> = Vec::with_capacity(columns);
        let mut tallest: Option<ShapeId> = None;

        for (i, shape) in shapes.into_iter().enumerate() {
            let id = self.add_boxed(shape);
            let column = i % columns;
            match (tallest, ids.last()) {
                (Some(tallest), _) => {
                    self.adjust(&[id]).below(tallest);
                    self.h_align_center(&[row[column], id]);
                }
                (None, Some(&previous)) => self.adjust(&[id]).right_of(previous),
                (None, None) => self.adjust(&[id]).at(x, y),
            }

            if column < row.len() {
                row[column] = id;
            } else {
                row.push(id);
            }
            ids.push(id);

            if column + 1 == columns {
                tallest = Some(self.tallest(&row));
                trace!(row = i / columns, tallest:?; "Grid row completed");
            }
        }

        ids
    }

    fn tallest(&self, ids: &[ShapeId]) -> ShapeId {
        let mut tallest = ids[0];
        let mut height = 0;
        for &id in ids {
            let current = self.shape(id).height();
            if current > height {
                height = current;
                tallest = id;
            }
        }
        tallest
    }

    /// Connects two shapes with an arrow, optionally labelled.
    ///
    /// The label of a horizontal arrow sits above it, centered; any other
    /// arrow gets its label next to its midpoint.
    pub fn link(
        &mut self,
        from: ShapeId,
        to: ShapeId,
        text: Option<&str>,
    ) -> (ShapeId, Option<ShapeId>) {
        let arrow = Arrow::between(self.shape(from).as_shape(), self.shape(to).as_shape());
        let horizontal = arrow.heading().is_some_and(Heading::is_horizontal);
        let center = arrow.center();
        let bounds = arrow.bounds();
        let arrow_id = self.add(arrow);

        let Some(text) = text else {
            return (arrow_id, None);
        };

        let label_id = self.add(Label::new(text));
        let pad = self.style.text_pad();
        if horizontal {
            let mut anchor = Frame::new(
                bounds.min_point(),
                Size::new(bounds.width(), bounds.height()),
            );
            let label = self.shapes[label_id.0].as_shape_mut();
            let gap = label.height() + pad.bottom();
            Adjuster::new(vec![&mut *label]).above_with_gap(&anchor, gap);
            let anchor: &mut dyn Shape = &mut anchor;
            Aligner::new(vec![anchor, label]).h_align_center();
        } else {
            let font_height = self.style.font().height();
            self.adjust(&[label_id])
                .at(center.x() + pad.left(), center.y() - font_height);
        }

        (arrow_id, Some(label_id))
    }

    /// Links every shape to the next one.
    pub fn link_all(&mut self, ids: &[ShapeId]) -> Vec<ShapeId> {
        ids.windows(2)
            .map(|pair| self.link(pair[0], pair[1], None).0)
            .collect()
    }

    /// Centers shapes vertically on the first one.
    pub fn v_align_center(&mut self, ids: &[ShapeId]) {
        Aligner::new(self.shapes_mut(ids)).v_align_center();
    }

    pub fn v_align_top(&mut self, ids: &[ShapeId]) {
        Aligner::new(self.shapes_mut(ids)).v_align_top();
    }

    pub fn v_align_bottom(&mut self, ids: &[ShapeId]) {
        Aligner::new(self.shapes_mut(ids)).v_align_bottom();
    }

    /// Centers shapes horizontally on the first one.
    pub fn h_align_center(&mut self, ids: &[ShapeId]) {
        Aligner::new(self.shapes_mut(ids)).h_align_center();
    }

    pub fn h_align_left(&mut self, ids: &[ShapeId]) {
        Aligner::new(self.shapes_mut(ids)).h_align_left();
    }

    pub fn h_align_right(&mut self, ids: &[ShapeId]) {
        Aligner::new(self.shapes_mut(ids)).h_align_right();
    }

    /// Fits the canvas to its shapes and returns the new size.
    ///
    /// The size is recomputed from scratch, so calling this repeatedly
    /// without moving shapes returns the same size.
    pub fn adapt_size(&mut self) -> Size {
        self.size = fit(self.shapes.iter().map(|s| s.as_shape()), self.style.pad());
        debug!(width = self.size.width(), height = self.size.height(); "Adapted diagram size");
        self.size
    }

    /// Size computed by the last [`adapt_size`](Self::adapt_size) call.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width()
    }

    pub fn height(&self) -> i32 {
        self.size.height()
    }

    /// Sets the caption rendered centered below the content.
    pub fn set_caption(&mut self, text: impl Into<String>) {
        self.caption = Some(text.into());
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Adds a legend entry explaining the CSS class `class`.
    ///
    /// Entries render in insertion order; adding a class again replaces its
    /// text in place.
    pub fn add_legend(&mut self, class: impl Into<String>, text: impl Into<String>) {
        self.legend.insert(class.into(), text.into());
    }

    pub fn legend(&self) -> impl Iterator<Item = (&str, &str)> {
        self.legend.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Lays out the caption and legend and computes the final canvas size.
    pub fn sheet(&self) -> Sheet<'_> {
        self.sheet_with(Vec::new())
    }

    /// Like [`sheet`](Self::sheet), with extra shapes painted above the
    /// diagram's own and taken into account when sizing.
    pub fn sheet_with(&self, extra: Vec<Box<dyn Drawable>>) -> Sheet<'_> {
        let mut sheet = Sheet {
            shapes: self.shapes().collect(),
            annotations: extra,
            size: Size::default(),
        };
        let pad = self.style.pad();
        sheet.size = sheet.fit(pad);

        if let Some(caption) = &self.caption {
            let mut label = Label::new(caption.as_str()).with_class("caption");
            self.apply_style(&mut label);
            let x = ((sheet.size.width() - label.width()) / 2).max(0);
            Adjuster::new(vec![&mut label]).at(x, sheet.size.height() + ANNOTATION_MARGIN);
            let font_height = label.font().height();
            sheet.annotations.push(Box::new(label));
            sheet.size = extend_height(sheet.fit(pad), font_height / 2);
        }

        if !self.legend.is_empty() {
            let x = LEGEND_X;
            let mut y = sheet.size.height() + ANNOTATION_MARGIN;
            for (class, text) in &self.legend {
                let mut swatch = Rect::new("")
                    .with_class(class.as_str())
                    .with_width(LEGEND_SWATCH)
                    .with_height(LEGEND_SWATCH);
                Adjuster::new(vec![&mut swatch]).at(x, y);

                let mut label = Label::new(text.as_str());
                self.apply_style(&mut label);
                Adjuster::new(vec![&mut label]).at(x + 16, y - 6);

                sheet.annotations.push(Box::new(swatch));
                sheet.annotations.push(Box::new(label));
                y += LEGEND_ROW_HEIGHT;
            }
            sheet.size = extend_height(sheet.fit(pad), self.style.font().height() / 2);
        }

        debug!(
            width = sheet.size.width(),
            height = sheet.size.height(),
            annotations = sheet.annotations.len();
            "Sheet laid out"
        );
        sheet
    }

    fn apply_style(&self, shape: &mut dyn Drawable) {
        if let Some(target) = shape.font_target() {
            target.set_font(self.style.font().clone());
        }
        if let Some(target) = shape.text_pad_target() {
            target.set_text_pad(self.style.text_pad());
        }
    }

    /// Mutable views of the shapes behind `ids`, in the order given.
    ///
    /// A handle listed twice is only returned once.
    fn shapes_mut(&mut self, ids: &[ShapeId]) -> Vec<&mut dyn Shape> {
        let mut slots: Vec<Option<&mut Box<dyn Drawable>>> =
            self.shapes.iter_mut().map(Some).collect();
        ids.iter()
            .filter_map(|id| slots[id.0].take())
            .map(|shape| shape.as_shape_mut())
            .collect()
    }
}

/// Canvas size fitting every shape, one unit wider and taller so the
/// right-most and bottom-most pixels stay visible.
fn fit<'a>(shapes: impl Iterator<Item = &'a dyn Shape>, pad: Insets) -> Size {
    let (width, height) = shapes.fold((0, 0), |(width, height), shape| {
        let top_left = shape.top_left();
        (
            width.max(
                top_left
                    .x()
                    .saturating_add(shape.width())
                    .saturating_add(pad.right()),
            ),
            height.max(
                top_left
                    .y()
                    .saturating_add(shape.height())
                    .saturating_add(pad.bottom()),
            ),
        )
    });
    Size::new(width.saturating_add(1), height.saturating_add(1))
}

fn extend_height(size: Size, extra: i32) -> Size {
    Size::new(size.width(), size.height() + extra)
}

/// Ongoing placement of shapes already on a diagram.
///
/// Directives are applied to the shapes in the order their handles were
/// given and chain the same way as [`Adjuster`].
#[derive(Debug)]
pub struct Adjust<'d> {
    diagram: &'d mut Diagram,
    ids: Vec<ShapeId>,
    spacing: i32,
}

impl<'d> Adjust<'d> {
    /// Overrides the diagram spacing for this directive.
    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn at(self, x: i32, y: i32) {
        self.adjuster().at(x, y);
    }

    pub fn right_of(self, reference: impl Anchor) {
        let frame = reference.frame(self.diagram);
        self.adjuster().right_of(&frame);
    }

    pub fn right_of_with_gap(self, reference: impl Anchor, gap: i32) {
        let frame = reference.frame(self.diagram);
        self.adjuster().right_of_with_gap(&frame, gap);
    }

    pub fn left_of(self, reference: impl Anchor) {
        let frame = reference.frame(self.diagram);
        self.adjuster().left_of(&frame);
    }

    pub fn left_of_with_gap(self, reference: impl Anchor, gap: i32) {
        let frame = reference.frame(self.diagram);
        self.adjuster().left_of_with_gap(&frame, gap);
    }

    pub fn below(self, reference: impl Anchor) {
        let frame = reference.frame(self.diagram);
        self.adjuster().below(&frame);
    }

    pub fn below_with_gap(self, reference: impl Anchor, gap: i32) {
        let frame = reference.frame(self.diagram);
        self.adjuster().below_with_gap(&frame, gap);
    }

    pub fn above(self, reference: impl Anchor) {
        let frame = reference.frame(self.diagram);
        self.adjuster().above(&frame);
    }

    pub fn above_with_gap(self, reference: impl Anchor, gap: i32) {
        let frame = reference.frame(self.diagram);
        self.adjuster().above_with_gap(&frame, gap);
    }

    fn adjuster(self) -> Adjuster<'d> {
        let Self {
            diagram,
            ids,
            spacing,
        } = self;
        Adjuster::new(diagram.shapes_mut(&ids)).with_spacing(spacing)
    }
}

/// Placement of a freshly added shape; every directive returns its handle.
#[derive(Debug)]
pub struct Placement<'d> {
    id: ShapeId,
    adjust: Adjust<'d>,
}

impl Placement<'_> {
    /// Handle of the placed shape, leaving it where it is.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.adjust = self.adjust.with_spacing(spacing);
        self
    }

    pub fn at(self, x: i32, y: i32) -> ShapeId {
        self.adjust.at(x, y);
        self.id
    }

    pub fn right_of(self, reference: impl Anchor) -> ShapeId {
        self.adjust.right_of(reference);
        self.id
    }

    pub fn right_of_with_gap(self, reference: impl Anchor, gap: i32) -> ShapeId {
        self.adjust.right_of_with_gap(reference, gap);
        self.id
    }

    pub fn left_of(self, reference: impl Anchor) -> ShapeId {
        self.adjust.left_of(reference);
        self.id
    }

    pub fn left_of_with_gap(self, reference: impl Anchor, gap: i32) -> ShapeId {
        self.adjust.left_of_with_gap(reference, gap);
        self.id
    }

    pub fn below(self, reference: impl Anchor) -> ShapeId {
        self.adjust.below(reference);
        self.id
    }

    pub fn below_with_gap(self, reference: impl Anchor, gap: i32) -> ShapeId {
        self.adjust.below_with_gap(reference, gap);
        self.id
    }

    pub fn above(self, reference: impl Anchor) -> ShapeId {
        self.adjust.above(reference);
        self.id
    }

    pub fn above_with_gap(self, reference: impl Anchor, gap: i32) -> ShapeId {
        self.adjust.above_with_gap(reference, gap);
        self.id
    }
}

/// A diagram ready to be serialized: its shapes, the annotations laid out
/// around them and the final canvas size.
#[derive(Debug)]
pub struct Sheet<'a> {
    shapes: Vec<&'a dyn Drawable>,
    annotations: Vec<Box<dyn Drawable>>,
    size: Size,
}

impl Sheet<'_> {
    pub fn size(&self) -> Size {
        self.size
    }

    /// Every shape to paint, bottom-most first.
    pub fn drawables(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.shapes
            .iter()
            .copied()
            .chain(self.annotations.iter().map(|shape| &**shape))
    }

    /// Shapes laid out while building the sheet: extra shapes, caption
    /// and legend.
    pub fn annotations(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.annotations.iter().map(|shape| &**shape)
    }

    fn fit(&self, pad: Insets) -> Size {
        fit(self.drawables().map(|shape| shape.as_shape()), pad)
    }
}
