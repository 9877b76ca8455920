//! Example: Building a class diagram programmatically
//!
//! This example demonstrates how to describe records by hand, relate them,
//! lay them out and write the result as an SVG file.

use easel::{
    class::ClassDiagram,
    export,
    shape::RecordDescription,
    style::Style,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building class diagram...\n");

    let mut class = ClassDiagram::new(Style::default());

    // Describe the records; nothing is inspected at runtime
    let house = class.add_struct(
        RecordDescription::new("House")
            .with_field("Door")
            .with_field("Windows")
            .with_method("Open"),
    )?;
    let door = class.add_struct(RecordDescription::new("Door").with_method("Open"))?;
    let opener = class.add_interface(RecordDescription::new("Opener").with_method("Open"))?;

    // Lay the records out relative to each other
    class.diagram_mut().adjust(&[house]).at(10, 10);
    class.diagram_mut().adjust(&[door]).right_of(house);
    class.diagram_mut().adjust(&[opener]).below(door);
    class.diagram_mut().v_align_center(&[house, door]);

    class.composes(house, door);
    class.implements(door, opener);
    class.set_caption("Figure 1. A house and its door");

    let sheet = class.sheet();
    println!("Created diagram:");
    println!("  Records: {}", class.diagram().len());
    println!("  Size: {}x{}", sheet.size().width(), sheet.size().height());
    println!();

    let output_path = "class_diagram_output.svg";
    export::svg::write_file(output_path, &sheet, class.diagram().style())?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
