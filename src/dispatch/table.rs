//! The cascade table: which metric groups each selection emits.
//!
//! Box and Sphere carry the flat figure they are built on (Rectangle and
//! Circle) after their own group. Output parity depends on this ordering.

use crate::domain::{MetricGroup, ShapeKind};

const BOX: &[MetricGroup] = &[MetricGroup::Box, MetricGroup::Rectangle];
const RECTANGLE: &[MetricGroup] = &[MetricGroup::Rectangle];
const SPHERE: &[MetricGroup] = &[MetricGroup::Sphere, MetricGroup::Circle];
const CIRCLE: &[MetricGroup] = &[MetricGroup::Circle];
const TRIANGLE: &[MetricGroup] = &[MetricGroup::RightTriangle];

/// Ordered metric groups for a selection.
pub fn groups_for(kind: ShapeKind) -> &'static [MetricGroup] {
    match kind {
        ShapeKind::Box => BOX,
        ShapeKind::Rectangle => RECTANGLE,
        ShapeKind::Sphere => SPHERE,
        ShapeKind::Circle => CIRCLE,
        ShapeKind::Triangle => TRIANGLE,
    }
}
