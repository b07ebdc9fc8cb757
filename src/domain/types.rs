//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be
//! used in-memory during dispatch and exported to JSON afterwards.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which figure the caller selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Rectangle,
    Sphere,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Box,
        ShapeKind::Rectangle,
        ShapeKind::Sphere,
        ShapeKind::Circle,
        ShapeKind::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Case-insensitive lookup by name.
    ///
    /// Returns `None` for anything that is not one of the five names; callers
    /// treat that as "nothing selected" rather than an error.
    pub fn from_name(name: &str) -> Option<ShapeKind> {
        let name = name.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

/// Raw scalar inputs for one computation.
///
/// No validation is applied: zero, negative and non-finite values all flow
/// straight into the formulas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

/// A figure whose two metrics are always emitted together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricGroup {
    Box,
    Rectangle,
    Sphere,
    Circle,
    RightTriangle,
}

impl MetricGroup {
    pub fn display_name(self) -> &'static str {
        match self {
            MetricGroup::Box => "box",
            MetricGroup::Rectangle => "rectangle",
            MetricGroup::Sphere => "sphere",
            MetricGroup::Circle => "circle",
            MetricGroup::RightTriangle => "right triangle",
        }
    }

    /// Metrics of this group in emit order.
    pub fn metrics(self) -> [MetricKind; 2] {
        match self {
            MetricGroup::Box => [MetricKind::BoxVolume, MetricKind::BoxSurfaceArea],
            MetricGroup::Rectangle => [MetricKind::RectanglePerimeter, MetricKind::RectangleArea],
            MetricGroup::Sphere => [MetricKind::SphereVolume, MetricKind::SphereSurfaceArea],
            MetricGroup::Circle => [MetricKind::CircleCircumference, MetricKind::CircleArea],
            MetricGroup::RightTriangle => [
                MetricKind::RightTrianglePerimeter,
                MetricKind::RightTriangleArea,
            ],
        }
    }
}

/// One formula/label pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    BoxVolume,
    BoxSurfaceArea,
    RectanglePerimeter,
    RectangleArea,
    SphereVolume,
    SphereSurfaceArea,
    CircleCircumference,
    CircleArea,
    RightTrianglePerimeter,
    RightTriangleArea,
}

impl MetricKind {
    pub fn group(self) -> MetricGroup {
        match self {
            MetricKind::BoxVolume | MetricKind::BoxSurfaceArea => MetricGroup::Box,
            MetricKind::RectanglePerimeter | MetricKind::RectangleArea => MetricGroup::Rectangle,
            MetricKind::SphereVolume | MetricKind::SphereSurfaceArea => MetricGroup::Sphere,
            MetricKind::CircleCircumference | MetricKind::CircleArea => MetricGroup::Circle,
            MetricKind::RightTrianglePerimeter | MetricKind::RightTriangleArea => {
                MetricGroup::RightTriangle
            }
        }
    }

    /// Short name of the quantity, e.g. "surface area".
    pub fn quantity(self) -> &'static str {
        match self {
            MetricKind::BoxVolume | MetricKind::SphereVolume => "volume",
            MetricKind::BoxSurfaceArea | MetricKind::SphereSurfaceArea => "surface area",
            MetricKind::RectanglePerimeter | MetricKind::RightTrianglePerimeter => "perimeter",
            MetricKind::CircleCircumference => "circumference",
            MetricKind::RectangleArea | MetricKind::CircleArea | MetricKind::RightTriangleArea => {
                "area"
            }
        }
    }
}

/// A computed metric ready for display.
///
/// `value` keeps full precision; rounding happens only when it is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub metric: MetricKind,
    pub label: String,
    pub value: f64,
}

/// Everything one invocation produced, in emit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub tool: String,
    pub shape: ShapeKind,
    pub dimensions: Dimensions,
    pub results: Vec<MetricResult>,
}

/// How `shapes compute` renders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sentence + value lines, as a transcript.
    #[default]
    Text,
    /// A pretty-printed JSON report.
    Json,
}
