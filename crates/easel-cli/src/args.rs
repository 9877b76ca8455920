//! Command-line argument definitions for the Easel CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the showcase diagram, the output path,
//! the configuration file and the logging verbosity.

use clap::{Parser, ValueEnum};

/// Built-in diagrams the CLI can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Showcase {
    /// Every shape kind connected by arrows, with a legend
    Shapes,
    /// Shapes of mixed heights laid out in a grid
    Grid,
    /// Structs and interfaces with their relations
    Class,
    /// A small project plan
    Gantt,
}

/// Command-line arguments for the Easel diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram to render
    #[arg(value_enum, help = "Showcase diagram to render")]
    pub showcase: Showcase,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
