//! Built-in showcase diagrams.
//!
//! Each showcase is built with the configured [`Style`] and written to the
//! output path as SVG.

use std::{num::NonZeroUsize, path::Path};

use log::debug;

use easel::{
    Diagram, EaselError,
    class::ClassDiagram,
    export,
    gantt::{GanttChart, Task},
    shape::{
        Circle, Diamond, Drawable, Label, Note, Rect, RecordDescription, Shape, Triangle,
    },
    style::Style,
};

use crate::args::Showcase;

/// Builds `showcase` with `style` and writes it to `output`.
///
/// # Errors
///
/// Returns an error if the showcase cannot be built or the file cannot be
/// written.
pub fn write(showcase: Showcase, style: Style, output: &Path) -> Result<(), EaselError> {
    debug!(showcase:?; "Building showcase");
    match showcase {
        Showcase::Shapes => {
            let diagram = shapes(style);
            export::svg::write_file(output, &diagram.sheet(), diagram.style())
        }
        Showcase::Grid => {
            let diagram = grid(style);
            export::svg::write_file(output, &diagram.sheet(), diagram.style())
        }
        Showcase::Class => {
            let class = class(style)?;
            export::svg::write_file(output, &class.sheet(), class.diagram().style())
        }
        Showcase::Gantt => {
            let diagram = gantt(style)?.to_diagram();
            export::svg::write_file(output, &diagram.sheet(), diagram.style())
        }
    }
}

fn shapes(style: Style) -> Diagram {
    let mut diagram = Diagram::new(style);
    let client = diagram.place(Rect::new("Client")).at(10, 30);
    let server = diagram.place(Rect::new("Server").with_class("span-green")).right_of(client);
    let check = diagram.place(Diamond::new()).right_of(server);
    let store = diagram.place(Circle::new(20)).below(server);
    let note = diagram
        .place(Note::new("Requests are\nretried twice"))
        .right_of(store);
    diagram.v_align_center(&[client, server, check]);

    diagram.link(client, server, Some("request"));
    diagram.link(server, store, Some("save"));
    diagram.link(server, check, None);

    let dot = diagram.place(Circle::dot()).below(client);
    diagram.h_align_center(&[client, dot]);
    let caption = diagram.place(Label::new("start")).right_of_with_gap(dot, 4);
    diagram.v_align_center(&[dot, caption]);

    let tip = diagram.shape(note).bounds();
    diagram.add(Triangle::new(tip.min_x(), tip.center().y(), "arrow-head"));

    diagram.add_legend("span-green", "Service");
    diagram.add_legend("note", "Remark");
    diagram.set_caption("Figure 1. Shapes and connectors");
    diagram.adapt_size();
    diagram
}

fn grid(style: Style) -> Diagram {
    let mut diagram = Diagram::new(style);
    let shapes: Vec<Box<dyn Drawable>> = vec![
        Box::new(Rect::new("Parse")),
        Box::new(Rect::new("Check").with_height(60)),
        Box::new(Circle::new(15)),
        Box::new(Rect::new("Lay out")),
        Box::new(Diamond::with_size(40, 30)),
        Box::new(Rect::new("Render")),
    ];
    let columns = NonZeroUsize::new(3).unwrap_or(NonZeroUsize::MIN);
    let ids = diagram.place_grid(columns, 10, 10, shapes);
    diagram.link_all(&ids);
    diagram.set_caption("Figure 2. Grid placement");
    diagram.adapt_size();
    diagram
}

fn class(style: Style) -> Result<ClassDiagram, EaselError> {
    let mut class = ClassDiagram::new(style);
    let house = class.add_struct(
        RecordDescription::new("House")
            .with_field("Door")
            .with_field("Windows")
            .with_method("Enter"),
    )?;
    let door = class.add_struct(RecordDescription::new("Door").with_method("Open"))?;
    let window = class.add_struct(RecordDescription::new("Window").with_field("Pane"))?;
    let opener = class.add_interface(RecordDescription::new("Opener").with_method("Open"))?;

    let diagram = class.diagram_mut();
    diagram.adjust(&[house]).at(10, 10);
    diagram.adjust(&[door, window]).right_of(house);
    diagram.adjust(&[opener]).below(door);
    diagram.v_align_center(&[house, door]);

    class.composes(house, door);
    class.aggregates(house, window);
    class.implements(door, opener);
    class.set_caption("Figure 3. A house and its parts");
    class.diagram_mut().adapt_size();
    Ok(class)
}

fn gantt(style: Style) -> Result<GanttChart, EaselError> {
    let mut chart = GanttChart::new("20191111", 30)?.with_style(style);
    let design = chart.add(Task::new("Design"));
    let develop = chart.add(Task::new("Develop").green());
    let vacation = chart.add(Task::new("Vacation").blue());
    let release = chart.add(Task::new("Release").red());

    chart.place(design).at("20191111", 4)?;
    chart.place(develop).after(design, 10);
    chart.place(vacation).at("20191202", 7)?;
    chart.place(release).after(develop, 1);
    chart.mark_date("20191120")?;
    chart.set_caption("Figure 4. Project estimated delivery");
    Ok(chart)
}
