//! CLI logic for the Easel diagram tool.
//!
//! This module contains the core CLI logic: it loads the configuration,
//! builds the requested showcase diagram and writes it as SVG.

pub mod error_adapter;

mod args;
mod config;
mod showcase;

pub use args::{Args, Showcase};

use std::path::Path;

use log::info;

use easel::EaselError;

/// Run the Easel CLI application
///
/// Builds the showcase selected in `args` with the configured style and
/// writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `EaselError` for:
/// - Configuration loading errors
/// - Invalid dates or record names in a showcase
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), EaselError> {
    info!(
        showcase:? = args.showcase,
        output_path = args.output;
        "Rendering showcase"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let style = app_config.style().to_style()?;

    showcase::write(args.showcase, style, Path::new(&args.output))?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
