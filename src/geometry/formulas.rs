//! Textbook formulas for the five supported figures.
//!
//! All functions are pure and unchecked: any real input (zero, negative,
//! non-finite) produces whatever the arithmetic yields. Callers that want
//! physically meaningful values are responsible for their own inputs.

use std::f64::consts::PI;

/// `length × width`
pub fn rectangle_area(length: f64, width: f64) -> f64 {
    length * width
}

/// `2 × (length + width)`
pub fn rectangle_perimeter(length: f64, width: f64) -> f64 {
    2.0 * (length + width)
}

/// `π × r²`
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// `2 × π × r`
pub fn circle_circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// `(base × height) / 2`; the right angle sits between base and height.
pub fn right_triangle_area(base: f64, height: f64) -> f64 {
    (base * height) / 2.0
}

/// `base + height + hypotenuse`
pub fn right_triangle_perimeter(base: f64, height: f64) -> f64 {
    // Plain sqrt, not `hypot`: the two can differ in the last bit.
    let hypotenuse = (base * base + height * height).sqrt();
    base + height + hypotenuse
}

/// `length × width × depth`
pub fn box_volume(length: f64, width: f64, depth: f64) -> f64 {
    length * width * depth
}

/// `2 × (l·w + l·d + w·d)`
pub fn box_surface_area(length: f64, width: f64, depth: f64) -> f64 {
    2.0 * (length * width + length * depth + width * depth)
}

/// `(4 × π × r³) / 3`
pub fn sphere_volume(radius: f64) -> f64 {
    (4.0 * PI * radius * radius * radius) / 3.0
}

/// `4 × π × r²`
pub fn sphere_surface_area(radius: f64) -> f64 {
    4.0 * PI * radius * radius
}
