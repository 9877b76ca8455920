//! Error types for Easel operations.
//!
//! This module provides the main error type [`EaselError`] which wraps
//! the error conditions that can occur while building and exporting
//! diagrams.

use std::io;

use thiserror::Error;

use easel_core::ShapeError;

/// The main error type for Easel operations.
#[derive(Debug, Error)]
pub enum EaselError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EaselError {
    /// Create a new `InvalidDate` error for the given input.
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
