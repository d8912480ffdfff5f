//! Conversions between radians and degrees.

use std::f64::consts::PI;

const DEGREES_PER_RADIAN: f64 = 180.0 / PI;
const RADIANS_PER_DEGREE: f64 = PI / 180.0;

/// Converts an angle in radians to degrees.
///
/// # Examples
/// ```
/// use u_gamemath::angle::to_degrees;
/// assert!((to_degrees(std::f64::consts::PI) - 180.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}

/// Converts an angle in degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * RADIANS_PER_DEGREE
}
