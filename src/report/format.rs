//! Text formatting for labels, values and the cascade table.
//!
//! Every string the dispatcher writes is produced here. Formulas and the
//! cascade table never touch text, and tests compare transcripts verbatim.

use crate::dispatch::groups_for;
use crate::domain::{Dimensions, MetricKind, ShapeKind};

/// Descriptive sentence printed in front of a metric's value.
///
/// The phrasing is fixed per metric, including the places where it is not
/// uniform ("has area of" vs "has a volume of").
pub fn metric_label(metric: MetricKind, d: &Dimensions) -> String {
    let l = fmt_dimension(d.length);
    let w = fmt_dimension(d.width);
    let h = fmt_dimension(d.height);
    let r = fmt_dimension(d.radius);

    match metric {
        MetricKind::BoxVolume => format!("A {l} by {w} by {h} box has a volume of: "),
        MetricKind::BoxSurfaceArea => format!("A {l} by {w} by {h} box has a surface area of: "),
        MetricKind::RectanglePerimeter => format!("A {l} by {w} rectangle has a perimeter of: "),
        MetricKind::RectangleArea => format!("A {l} by {w} rectangle has area of: "),
        MetricKind::SphereVolume => format!("A sphere with radius {r} has a volume of: "),
        MetricKind::SphereSurfaceArea => format!("A sphere with radius {r} has surface area of: "),
        MetricKind::CircleCircumference => format!("A circle with radius {r} has a perimeter of: "),
        MetricKind::CircleArea => format!("A circle with radius {r} has area of: "),
        MetricKind::RightTrianglePerimeter => {
            format!("A right triangle with base {l} and height {w} has a perimeter of: ")
        }
        MetricKind::RightTriangleArea => {
            format!("A right triangle with base {l} and height {w} has area of: ")
        }
    }
}

/// Render a metric value with two decimals.
///
/// Rounds half-up on the shortest decimal digits that round-trip the value,
/// so `1.005` prints `1.01` and `0.125` prints `0.13`. The sign is kept even
/// when the rounded digits are all zero (`-0.001` prints `-0.00`).
pub fn fmt_value(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let (mut digits, mut point) = shortest_digits(v.abs());
    let keep = point + FRACTION_DIGITS;
    if digits.len() <= keep {
        digits.resize(keep + 1, 0);
    }
    let round_up = digits[keep] >= 5;
    digits.truncate(keep);

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            point += 1;
        }
    }

    let (int_part, frac_part) = digits.split_at(point);
    let int_part = match int_part.iter().position(|&d| d != 0) {
        Some(first) => &int_part[first..],
        None => &[0][..],
    };

    let mut out = String::with_capacity(int_part.len() + FRACTION_DIGITS + 2);
    if v.is_sign_negative() {
        out.push('-');
    }
    out.extend(int_part.iter().map(|&d| char::from(b'0' + d)));
    out.push('.');
    out.extend(frac_part.iter().map(|&d| char::from(b'0' + d)));
    out
}

const FRACTION_DIGITS: usize = 2;

/// Shortest round-trip decimal digits of a finite, non-negative value, plus
/// the number of digits before the decimal point.
///
/// Leading zeros are inserted for values below one, so the point is never
/// negative: `0.0125` gives `([0, 1, 2, 5], 0)` read as `.0125`.
fn shortest_digits(v: f64) -> (Vec<u8>, usize) {
    let sci = format!("{v:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let point = exponent + 1;
    if point < 0 {
        let pad = point.unsigned_abs() as usize;
        digits.splice(0..0, std::iter::repeat_n(0, pad));
        return (digits, 0);
    }
    (digits, point as usize)
}

/// Render a dimension the way it reads when a double is concatenated into text.
///
/// - plain decimal with at least one fractional digit for `1e-3 <= |v| < 1e7` (`2.0`, `0.5`)
/// - scientific with an upper-case `E` otherwise (`1.0E7`, `2.5E-4`)
/// - `0.0` / `-0.0`, `NaN`, `Infinity`, `-Infinity`
pub fn fmt_dimension(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = v.abs();
    if v == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // `{:?}` is the shortest round-trip form and always keeps a `.0`.
        return format!("{v:?}");
    }

    let sci = format!("{v:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}

/// Format the cascade table: which groups and metrics each selection emits.
pub fn format_group_table() -> String {
    let mut out = String::new();

    out.push_str(format!("{:<10} {:<28} {}", "shape", "groups", "metrics").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<10} {:-<28} {:-<40}", "", "", "").trim_end());
    out.push('\n');

    for kind in ShapeKind::ALL {
        let groups = groups_for(kind);
        let group_names: Vec<&str> = groups.iter().map(|g| g.display_name()).collect();
        let metric_names: Vec<String> = groups
            .iter()
            .flat_map(|g| g.metrics())
            .map(|m| format!("{} {}", m.group().display_name(), m.quantity()))
            .collect();

        out.push_str(
            format!(
                "{:<10} {:<28} {}",
                kind.name(),
                group_names.join(" -> "),
                metric_names.join(", ")
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_plain_range() {
        assert_eq!(fmt_dimension(2.0), "2.0");
        assert_eq!(fmt_dimension(0.5), "0.5");
        assert_eq!(fmt_dimension(-3.25), "-3.25");
        assert_eq!(fmt_dimension(0.001), "0.001");
        assert_eq!(fmt_dimension(1234567.0), "1234567.0");
    }

    #[test]
    fn dimension_zero_keeps_sign() {
        assert_eq!(fmt_dimension(0.0), "0.0");
        assert_eq!(fmt_dimension(-0.0), "-0.0");
    }

    #[test]
    fn dimension_scientific_range() {
        assert_eq!(fmt_dimension(1e7), "1.0E7");
        assert_eq!(fmt_dimension(2.5e-4), "2.5E-4");
        assert_eq!(fmt_dimension(-1.5e10), "-1.5E10");
    }

    #[test]
    fn dimension_non_finite() {
        assert_eq!(fmt_dimension(f64::NAN), "NaN");
        assert_eq!(fmt_dimension(f64::INFINITY), "Infinity");
        assert_eq!(fmt_dimension(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn value_two_decimals() {
        assert_eq!(fmt_value(24.0), "24.00");
        assert_eq!(fmt_value(113.097_335_529_232_56), "113.10");
        assert_eq!(fmt_value(-6.0), "-6.00");
        assert_eq!(fmt_value(f64::INFINITY), "Infinity");
        assert_eq!(fmt_value(f64::NAN), "NaN");
    }

    #[test]
    fn value_rounds_half_up_on_shortest_digits() {
        assert_eq!(fmt_value(0.125), "0.13");
        assert_eq!(fmt_value(1.005), "1.01");
        assert_eq!(fmt_value(2.675), "2.68");
        assert_eq!(fmt_value(1.115), "1.12");
        assert_eq!(fmt_value(-0.125), "-0.13");
        assert_eq!(fmt_value(0.005), "0.01");
    }

    #[test]
    fn value_rounding_carries_and_keeps_sign() {
        assert_eq!(fmt_value(9.995), "10.00");
        assert_eq!(fmt_value(99.999), "100.00");
        assert_eq!(fmt_value(0.0), "0.00");
        assert_eq!(fmt_value(-0.0), "-0.00");
        assert_eq!(fmt_value(-0.001), "-0.00");
        assert_eq!(fmt_value(0.004), "0.00");
        assert_eq!(fmt_value(1e20), "100000000000000000000.00");
        assert_eq!(fmt_value(1.5e-7), "0.00");
    }

    #[test]
    fn triangle_label_names_base_and_height() {
        let d = Dimensions { length: 3.0, width: 4.0, height: 9.0, radius: 0.0 };
        assert_eq!(
            metric_label(MetricKind::RightTriangleArea, &d),
            "A right triangle with base 3.0 and height 4.0 has area of: "
        );
    }

    #[test]
    fn circle_circumference_reads_as_perimeter() {
        let d = Dimensions { radius: 1.5, ..Dimensions::default() };
        assert_eq!(
            metric_label(MetricKind::CircleCircumference, &d),
            "A circle with radius 1.5 has a perimeter of: "
        );
    }

    #[test]
    fn group_table_lists_cascade() {
        let table = format_group_table();
        let box_row = table.lines().find(|l| l.starts_with("box")).unwrap();
        assert!(box_row.contains("box -> rectangle"), "{box_row}");
        let circle_row = table.lines().find(|l| l.starts_with("circle")).unwrap();
        assert!(!circle_row.contains("sphere"), "{circle_row}");
        assert_eq!(table.lines().count(), 2 + ShapeKind::ALL.len());
    }
}
