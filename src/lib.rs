//! `shape-metrics` library crate.
//!
//! Everything lives here; the `shapes` binary only calls `app::run` and maps
//! the error to an exit code. A different front-end plugs in by implementing
//! `dispatch::InputSource` and `dispatch::OutputSink`.

pub mod app;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod io;
pub mod logging;
pub mod report;
