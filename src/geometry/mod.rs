//! Geometry formulas and metric evaluation.

pub mod formulas;

pub use formulas::*;

use crate::domain::{Dimensions, MetricKind};

/// Evaluate one metric against a dimension bundle.
///
/// Each metric reads only the fields its figure needs:
/// - box: `length`, `width`, `height` (as depth)
/// - rectangle: `length`, `width`
/// - sphere / circle: `radius`
/// - right triangle: `length` as base, `width` as height
pub fn evaluate(metric: MetricKind, d: &Dimensions) -> f64 {
    match metric {
        MetricKind::BoxVolume => box_volume(d.length, d.width, d.height),
        MetricKind::BoxSurfaceArea => box_surface_area(d.length, d.width, d.height),
        MetricKind::RectanglePerimeter => rectangle_perimeter(d.length, d.width),
        MetricKind::RectangleArea => rectangle_area(d.length, d.width),
        MetricKind::SphereVolume => sphere_volume(d.radius),
        MetricKind::SphereSurfaceArea => sphere_surface_area(d.radius),
        MetricKind::CircleCircumference => circle_circumference(d.radius),
        MetricKind::CircleArea => circle_area(d.radius),
        MetricKind::RightTrianglePerimeter => right_triangle_perimeter(d.length, d.width),
        MetricKind::RightTriangleArea => right_triangle_area(d.length, d.width),
    }
}
