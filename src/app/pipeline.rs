//! The compute pipeline shared by text and JSON output.
//!
//! selection -> dispatch (or pure compute) -> render -> optional export

use std::io::Write;

use tracing::{debug, info};

use crate::config::ComputeConfig;
use crate::dispatch::{ConsoleSink, Dispatcher, StaticInput};
use crate::domain::{MetricResult, OutputFormat};
use crate::error::AppError;
use crate::io::export::{report_to_json, write_report_json};
use crate::report::{build_report, compute_results};

/// Run one computation, writing the rendered output to `writer`.
///
/// Returns the results in emit order; empty when nothing was selected.
pub fn run_compute<W: Write>(config: &ComputeConfig, writer: W) -> Result<Vec<MetricResult>, AppError> {
    let Some(kind) = config.shape else {
        match config.shape_name.as_deref() {
            Some(name) => debug!(name, "unrecognised shape; ignoring"),
            None => debug!("no shape given; ignoring"),
        }
        return Ok(Vec::new());
    };

    let results = match config.format {
        OutputFormat::Text => {
            let input = StaticInput::new(Some(kind), config.dimensions);
            let mut dispatcher = Dispatcher::new(ConsoleSink::new(writer));
            dispatcher.process(&input).map_err(AppError::output)?
        }
        OutputFormat::Json => {
            let results = compute_results(kind, &config.dimensions);
            let report = build_report(kind, config.dimensions, results.clone());
            let mut writer = writer;
            writeln!(writer, "{}", report_to_json(&report)?).map_err(AppError::output)?;
            results
        }
    };

    if let Some(path) = &config.export {
        let report = build_report(kind, config.dimensions, results.clone());
        write_report_json(path, &report)?;
        info!(path = %path.display(), "wrote report");
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dimensions, ShapeKind};
    use pretty_assertions::assert_eq;

    fn config(shape: Option<ShapeKind>, format: OutputFormat) -> ComputeConfig {
        ComputeConfig {
            shape_name: shape.map(|k| k.name().to_string()),
            shape,
            dimensions: Dimensions { length: 3.0, width: 4.0, height: 0.0, radius: 0.0 },
            format,
            export: None,
        }
    }

    #[test]
    fn text_output_matches_transcript() {
        let mut out = Vec::new();
        let results = run_compute(&config(Some(ShapeKind::Rectangle), OutputFormat::Text), &mut out).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A 3.0 by 4.0 rectangle has a perimeter of: 14.00\n\
             \n\
             A 3.0 by 4.0 rectangle has area of: 12.00\n\
             \n"
        );
    }

    #[test]
    fn json_output_is_a_report() {
        let mut out = Vec::new();
        run_compute(&config(Some(ShapeKind::Triangle), OutputFormat::Json), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["tool"], "shapes");
        assert_eq!(value["results"][0]["value"], 12.0);
        assert_eq!(value["results"][1]["value"], 6.0);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn closed_stdout_is_output_error() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let err = run_compute(&config(Some(ShapeKind::Box), format), ClosedPipe).unwrap_err();
            assert_eq!(err.exit_code(), crate::error::EXIT_OUTPUT, "{format:?}");
            assert!(err.to_string().contains("pipe closed"), "{err}");
        }
    }

    #[test]
    fn unknown_shape_prints_nothing() {
        let mut cfg = config(None, OutputFormat::Text);
        cfg.shape_name = Some("hexagon".to_string());
        let mut out = Vec::new();
        let results = run_compute(&cfg, &mut out).unwrap();
        assert!(results.is_empty());
        assert!(out.is_empty());
    }
}
