//! Shape dispatch: turn a selection into an ordered run of labelled values.
//!
//! The dispatcher owns an output sink and reads from an input source on each
//! call, so a front-end only has to implement the two collaborator traits.

use std::io;

use tracing::{debug, trace};

use crate::domain::{Dimensions, MetricResult, ShapeKind};
use crate::report::{compute_results, fmt_value};

pub mod input;
pub mod sink;
pub mod table;

pub use input::{InputSource, StaticInput};
pub use sink::{ConsoleSink, Fragment, OutputSink, Transcript};
pub use table::groups_for;

/// Writes metric results for whatever the input source has selected.
#[derive(Debug)]
pub struct Dispatcher<O: OutputSink> {
    out: O,
}

impl<O: OutputSink> Dispatcher<O> {
    pub fn new(out: O) -> Self {
        Self { out }
    }

    pub fn sink(&self) -> &O {
        &self.out
    }

    pub fn into_sink(self) -> O {
        self.out
    }

    /// Read the selection, compute its metrics and emit them.
    ///
    /// With no selection nothing is written and an empty list is returned.
    pub fn process<I: InputSource + ?Sized>(&mut self, input: &I) -> io::Result<Vec<MetricResult>> {
        let Some(kind) = input.shape() else {
            debug!("no shape selected; nothing to emit");
            return Ok(Vec::new());
        };
        let dimensions = input.dimensions();
        self.process_shape(kind, &dimensions)
    }

    /// Compute and emit the metrics for an explicit selection.
    pub fn process_shape(&mut self, kind: ShapeKind, dimensions: &Dimensions) -> io::Result<Vec<MetricResult>> {
        debug!(shape = kind.name(), groups = ?groups_for(kind), "dispatching");
        let results = compute_results(kind, dimensions);
        emit(&mut self.out, &results)?;
        Ok(results)
    }
}

/// Write results to a sink: label, value line, blank separator line.
pub fn emit<O: OutputSink + ?Sized>(out: &mut O, results: &[MetricResult]) -> io::Result<()> {
    for result in results {
        trace!(metric = ?result.metric, value = result.value, "emit");
        out.print(&result.label)?;
        out.println(&fmt_value(result.value))?;
        out.blank_line()?;
    }
    Ok(())
}
