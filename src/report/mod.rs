//! Reporting utilities: metric results and the serializable run report.

pub mod format;

pub use format::{fmt_dimension, fmt_value, format_group_table, metric_label};

use crate::dispatch::groups_for;
use crate::domain::{Dimensions, MetricResult, Report, ShapeKind};
use crate::geometry::evaluate;

/// Compute every metric a selection emits, in emit order, without writing anything.
pub fn compute_results(kind: ShapeKind, dimensions: &Dimensions) -> Vec<MetricResult> {
    groups_for(kind)
        .iter()
        .flat_map(|group| group.metrics())
        .map(|metric| MetricResult {
            metric,
            label: metric_label(metric, dimensions),
            value: evaluate(metric, dimensions),
        })
        .collect()
}

/// Bundle a run's results for JSON export.
pub fn build_report(kind: ShapeKind, dimensions: Dimensions, results: Vec<MetricResult>) -> Report {
    Report {
        tool: "shapes".to_string(),
        shape: kind,
        dimensions,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MetricKind;

    #[test]
    fn sphere_results_cascade_into_circle() {
        let d = Dimensions { radius: 3.0, ..Dimensions::default() };
        let metrics: Vec<MetricKind> = compute_results(ShapeKind::Sphere, &d)
            .into_iter()
            .map(|r| r.metric)
            .collect();
        assert_eq!(
            metrics,
            vec![
                MetricKind::SphereVolume,
                MetricKind::SphereSurfaceArea,
                MetricKind::CircleCircumference,
                MetricKind::CircleArea,
            ]
        );
    }

    #[test]
    fn results_keep_full_precision() {
        let d = Dimensions { radius: 1.0, ..Dimensions::default() };
        let results = compute_results(ShapeKind::Circle, &d);
        assert_eq!(results[1].metric, MetricKind::CircleArea);
        assert_eq!(results[1].value, std::f64::consts::PI);
    }
}
