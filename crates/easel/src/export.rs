//! Export of laid-out diagrams.
//!
//! A [`Sheet`](crate::Sheet) holds everything a backend needs: the shapes in
//! painting order, the caption and legend annotations and the final canvas
//! size.
//!
//! # Available Backends
//!
//! - [`svg`]: standalone SVG documents with an embedded stylesheet

pub mod svg;
