//! Class diagrams: records for structs and interfaces plus the relations
//! between them.
//!
//! Relations are declared explicitly and drawn when the diagram is laid
//! out, so records can be moved freely after a relation is declared.

use log::debug;

use easel_core::{
    shape::{Arrow, Drawable, Record, RecordDescription},
    style::Style,
};

use crate::{Diagram, EaselError, ShapeId, diagram::Sheet};

/// Kind of relation between two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// A struct implements an interface.
    Implements,
    /// The whole owns the part by value.
    Composes,
    /// The whole refers to the part.
    Aggregates,
}

impl RelationKind {
    fn class(self) -> &'static str {
        match self {
            Self::Implements => "implements-arrow",
            Self::Composes => "compose-arrow",
            Self::Aggregates => "aggregate-arrow",
        }
    }

    fn has_tail(self) -> bool {
        !matches!(self, Self::Implements)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Relation {
    kind: RelationKind,
    from: ShapeId,
    to: ShapeId,
}

/// A diagram of struct and interface records.
#[derive(Debug, Default)]
pub struct ClassDiagram {
    diagram: Diagram,
    relations: Vec<Relation>,
}

impl ClassDiagram {
    pub fn new(style: Style) -> Self {
        Self {
            diagram: Diagram::new(style),
            relations: Vec::new(),
        }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// The underlying diagram, for placing records and other shapes.
    pub fn diagram_mut(&mut self) -> &mut Diagram {
        &mut self.diagram
    }

    /// Adds a struct record.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Shape`] if the title or a member name is empty.
    pub fn add_struct(&mut self, description: RecordDescription) -> Result<ShapeId, EaselError> {
        let record = Record::from_description(description)?;
        Ok(self.diagram.add(record))
    }

    /// Adds an interface record.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Shape`] if the title or a method name is empty.
    pub fn add_interface(
        &mut self,
        description: RecordDescription,
    ) -> Result<ShapeId, EaselError> {
        let record = Record::from_description(description)?.with_class("interface");
        Ok(self.diagram.add(record))
    }

    /// Declares that `implementor` implements `interface`.
    pub fn implements(&mut self, implementor: ShapeId, interface: ShapeId) {
        self.relate(RelationKind::Implements, implementor, interface);
    }

    /// Declares that `whole` owns `part` by value.
    pub fn composes(&mut self, whole: ShapeId, part: ShapeId) {
        self.relate(RelationKind::Composes, whole, part);
    }

    /// Declares that `whole` refers to `part`.
    pub fn aggregates(&mut self, whole: ShapeId, part: ShapeId) {
        self.relate(RelationKind::Aggregates, whole, part);
    }

    fn relate(&mut self, kind: RelationKind, from: ShapeId, to: ShapeId) {
        debug!(kind:?, from = from.index(), to = to.index(); "Adding relation");
        self.relations.push(Relation { kind, from, to });
    }

    pub fn set_caption(&mut self, text: impl Into<String>) {
        self.diagram.set_caption(text);
    }

    /// Arrows for every relation between the records' current positions.
    pub fn relation_arrows(&self) -> Vec<Box<dyn Drawable>> {
        self.relations
            .iter()
            .map(|relation| {
                let mut arrow = Arrow::between(
                    self.diagram.shape(relation.from).as_shape(),
                    self.diagram.shape(relation.to).as_shape(),
                )
                .with_class(relation.kind.class());
                arrow.set_tail(relation.kind.has_tail());
                Box::new(arrow) as Box<dyn Drawable>
            })
            .collect()
    }

    /// Lays out the diagram with its relation arrows.
    pub fn sheet(&self) -> Sheet<'_> {
        self.diagram.sheet_with(self.relation_arrows())
    }
}

#[cfg(test)]
mod tests {
    use easel_core::shape::Shape;

    use super::*;

    fn house_and_door() -> (ClassDiagram, ShapeId, ShapeId) {
        let mut class = ClassDiagram::default();
        let house = class
            .add_struct(RecordDescription::new("House").with_field("Door"))
            .unwrap();
        let door = class
            .add_struct(RecordDescription::new("Door").with_method("Open"))
            .unwrap();
        class.diagram_mut().adjust(&[house]).at(0, 0);
        class.diagram_mut().adjust(&[door]).right_of(house);
        (class, house, door)
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut class = ClassDiagram::default();
        let err = class.add_struct(RecordDescription::new("")).unwrap_err();
        assert!(matches!(err, EaselError::Shape(_)));
        assert!(class.diagram().is_empty());
    }

    #[test]
    fn test_interface_class() {
        let mut class = ClassDiagram::default();
        let part = class
            .add_interface(RecordDescription::new("Part").with_method("Size"))
            .unwrap();
        let rendered = class.diagram().shape(part).render_to_svg().to_string();
        assert!(rendered.contains("class=\"interface\""));
    }

    #[test]
    fn test_relations_follow_current_positions() {
        let (mut class, house, door) = house_and_door();
        class.composes(house, door);
        class.diagram_mut().adjust(&[door]).below(house);

        let arrows = class.relation_arrows();
        assert_eq!(arrows.len(), 1);
        let house_shape = class.diagram().shape(house);
        let door_shape = class.diagram().shape(door);
        let arrow = &arrows[0];
        assert_eq!(
            arrow.position().y(),
            house_shape.position().y() + house_shape.height()
        );
        assert_eq!(arrow.bounds().max_y(), door_shape.position().y());
        let rendered = arrow.render_to_svg().to_string();
        assert!(rendered.contains("compose-arrow-tail"));
    }

    #[test]
    fn test_relation_classes() {
        let (mut class, house, door) = house_and_door();
        class.implements(door, house);
        class.aggregates(house, door);
        let rendered: Vec<String> = class
            .relation_arrows()
            .iter()
            .map(|arrow| arrow.render_to_svg().to_string())
            .collect();
        assert!(rendered[0].contains("implements-arrow"));
        assert!(!rendered[0].contains("-tail"));
        assert!(rendered[1].contains("aggregate-arrow-tail"));
    }

    #[test]
    fn test_sheet_includes_relations() {
        let (mut class, house, door) = house_and_door();
        class.composes(house, door);
        class.set_caption("Small example diagram");
        let sheet = class.sheet();
        // relation arrow and caption
        assert_eq!(sheet.annotations().count(), 2);
        assert_eq!(sheet.drawables().count(), 4);
    }
}
