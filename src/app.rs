//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads environment settings and installs logging
//! - parses CLI arguments
//! - runs the compute pipeline or prints the cascade table

use clap::Parser;

use crate::cli::{Command, ComputeArgs};
use crate::config::{ComputeConfig, Settings};
use crate::domain::{Dimensions, ShapeKind};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `shapes` binary.
pub fn run() -> Result<(), AppError> {
    let settings = Settings::from_env();
    crate::logging::init_tracing(&settings);

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Compute(args) => handle_compute(&args),
        Command::Table => handle_table(),
    }
}

fn handle_compute(args: &ComputeArgs) -> Result<(), AppError> {
    let config = compute_config_from_args(args);
    pipeline::run_compute(&config, std::io::stdout().lock())?;
    Ok(())
}

fn handle_table() -> Result<(), AppError> {
    use std::io::Write;

    let table = crate::report::format_group_table();
    std::io::stdout()
        .lock()
        .write_all(table.as_bytes())
        .map_err(AppError::output)
}

pub fn compute_config_from_args(args: &ComputeArgs) -> ComputeConfig {
    ComputeConfig {
        shape_name: args.shape.clone(),
        shape: args.shape.as_deref().and_then(ShapeKind::from_name),
        dimensions: Dimensions {
            length: args.length,
            width: args.width,
            height: args.height,
            radius: args.radius,
        },
        format: args.format,
        export: args.export.clone(),
    }
}

/// Rewrite argv so bare flags mean `compute`.
///
/// Rules:
/// - `shapes`                       -> `shapes --help`
/// - `shapes --shape box ...`       -> `shapes compute --shape box ...`
/// - `shapes --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("--help".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "compute" | "table");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "compute".to_string());
        return argv;
    }

    argv
}
