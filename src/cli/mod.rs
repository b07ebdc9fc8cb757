//! Command-line parsing for the shape metrics calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from
//! dispatch and formatting.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "shapes", version, about = "Area, perimeter, volume and surface area for five shapes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute and print the metrics for one shape.
    ///
    /// Box also prints its rectangle's metrics; sphere also prints its circle's.
    Compute(ComputeArgs),
    /// Show which metrics each shape prints, in order.
    Table,
}

/// Shape selection and dimensions.
#[derive(Debug, Args, Clone)]
pub struct ComputeArgs {
    /// Shape to compute (box, rectangle, sphere, circle, triangle).
    ///
    /// Any other name prints nothing.
    #[arg(short = 's', long)]
    pub shape: Option<String>,

    /// Length (also the right triangle's base).
    #[arg(short = 'l', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub length: f64,

    /// Width (also the right triangle's height).
    #[arg(short = 'w', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub width: f64,

    /// Height (the box's depth).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub height: f64,

    /// Radius for sphere and circle.
    #[arg(short = 'r', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub radius: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the results to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
