//! Linear interpolation for scalars and points.
//!
//! Both functions use the two-product form `(1 − t)·v0 + t·v1`, which hits
//! `v0` exactly at `t = 0` and `v1` exactly at `t = 1`. The parameter is not
//! restricted: values outside `[0, 1]` extrapolate along the same line.

use crate::geometry::Point2;

/// Interpolates linearly between `v0` and `v1`.
///
/// # Examples
/// ```
/// use u_gamemath::interpolation::lerp;
/// assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
/// assert_eq!(lerp(10.0, 20.0, 2.0), 30.0);
/// ```
#[must_use]
pub fn lerp(v0: f64, v1: f64, t: f64) -> f64 {
    (1.0 - t) * v0 + t * v1
}

/// Interpolates each component of two points independently.
#[must_use]
pub fn lerp_2d(p0: Point2, p1: Point2, t: f64) -> Point2 {
    Point2::new(lerp(p0.x, p1.x, t), lerp(p0.y, p1.y, t))
}
