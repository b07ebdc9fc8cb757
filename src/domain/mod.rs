//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the shape selector (`ShapeKind`) and raw inputs (`Dimensions`)
//! - the metric catalogue (`MetricKind`, `MetricGroup`)
//! - computed outputs (`MetricResult`, `Report`)

pub mod types;

pub use types::*;
