//! Easel - relative-layout diagramming with SVG export.
//!
//! Shapes are placed on a [`Diagram`] with relative directives ("right of",
//! "below", "centered on") instead of absolute coordinates, then the canvas
//! fits itself to its content and is written out as SVG. Class diagrams
//! ([`class::ClassDiagram`]) and gantt charts ([`gantt::GanttChart`]) are
//! built on the same canvas.
//!
//! # Examples
//!
//! ```
//! use easel::{Diagram, export, shape::Rect, style::Style};
//!
//! let mut diagram = Diagram::new(Style::default());
//! let client = diagram.place(Rect::new("Client")).at(10, 10);
//! let server = diagram.place(Rect::new("Server")).right_of(client);
//! diagram.link(client, server, Some("request"));
//! diagram.set_caption("Figure 1. Request flow");
//!
//! let svg = export::svg::render(&diagram.sheet(), diagram.style());
//! assert!(svg.contains("Server"));
//! ```

pub mod class;
pub mod config;
pub mod date;
pub mod export;
pub mod gantt;

mod diagram;
mod error;

pub use easel_core::{adjust, align, color, geometry, shape, style};

pub use diagram::{Adjust, Anchor, Diagram, Placement, ShapeId, Sheet};
pub use error::EaselError;
