//! SVG rendering of diagram sheets.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use easel_core::style::Style;

use crate::{EaselError, diagram::Sheet};

/// Renders `sheet` as a standalone SVG document.
pub fn render(sheet: &Sheet<'_>, style: &Style) -> String {
    document(sheet, style).to_string()
}

/// Renders `sheet` and writes the document to `path`.
///
/// # Errors
///
/// Returns [`EaselError::Io`] if the file cannot be created or written.
pub fn write_file(path: impl AsRef<Path>, sheet: &Sheet<'_>, style: &Style) -> Result<(), EaselError> {
    let path = path.as_ref();
    let file_name = path.display().to_string();
    info!(file_name; "Creating SVG file");

    let doc = document(sheet, style);
    debug!("SVG document rendered");

    let mut f = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            error!(file_name, err:err; "Failed to create SVG file");
            return Err(EaselError::Io(err));
        }
    };

    if let Err(err) = write!(f, "{doc}") {
        error!(file_name, err:err; "Failed to write SVG content");
        return Err(EaselError::Io(err));
    }

    Ok(())
}

fn document(sheet: &Sheet<'_>, style: &Style) -> Document {
    let size = sheet.size();
    let mut doc = Document::new()
        .set("width", size.width())
        .set("height", size.height())
        .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
        .set("font-family", style.font().family())
        .add(svg_element::Style::new(stylesheet(style)));

    if let Some(background) = style.background() {
        doc = doc.add(
            svg_element::Rectangle::new()
                .set("class", "background")
                .set("x", 0)
                .set("y", 0)
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", background.to_string()),
        );
    }

    for shape in sheet.drawables() {
        doc = doc.add(shape.render_to_svg());
    }

    doc
}

/// CSS rules for every class the built-in shapes and charts emit.
fn stylesheet(style: &Style) -> String {
    let stroke = style.stroke();
    let fill = style.fill();
    let font = style.font();
    format!(
        "\
text {{ font-size: {font_size}px; fill: {stroke}; }}
path, line {{ stroke: {stroke}; stroke-width: 1; fill: none; }}
.rect, .record, .note, .interface, .circle, .diamond {{ stroke: {stroke}; stroke-width: 1; fill: {fill}; }}
.dot, .arrow-head, .arrow-tail, .compose-arrow-head, .compose-arrow-tail, .aggregate-arrow-head, .implements-arrow-head {{ stroke: {stroke}; fill: {stroke}; }}
.aggregate-arrow-tail {{ stroke: {stroke}; fill: white; }}
.implements-arrow {{ stroke-dasharray: 5,5; }}
.implements-arrow-head {{ fill: white; }}
.caption {{ font-style: italic; }}
.record-title, .interface-title {{ font-weight: bold; }}
.span {{ fill: #e2e2f1; stroke: #d1d1e6; }}
.span-red {{ fill: #ffb3b3; stroke: #e69999; }}
.span-green {{ fill: #c0ffc0; stroke: #99e699; }}
.span-blue {{ fill: #b3d9ff; stroke: #99c2e6; }}
.mark {{ stroke: #e60000; stroke-dasharray: 3,3; }}
.day {{ fill: #666666; }}
",
        font_size = font.height(),
    )
}
