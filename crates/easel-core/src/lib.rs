//! Easel Core Types and Layout Primitives
//!
//! This crate provides the building blocks of Easel diagrams. It includes:
//!
//! - **Geometry**: Integer points, sizes, bounds and arrow geometry ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Style**: Fonts, paddings and spacing ([`style`] module)
//! - **Shapes**: The shape capability traits and built-in shapes ([`shape`] module)
//! - **Layout**: Relative placement ([`adjust::Adjuster`]) and alignment
//!   ([`align::Aligner`])

pub mod adjust;
pub mod align;
pub mod color;
pub mod error;
pub mod geometry;
pub mod shape;
pub mod style;

pub use error::ShapeError;
