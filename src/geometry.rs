//! Planar geometry on plain `f64` coordinates.
//!
//! [`Point2`] doubles as a position and a displacement; nothing in the type
//! tells the two roles apart.
//!
//! # Non-finite results
//!
//! [`direction_2d`] normalizes by the displacement's magnitude. When both
//! points coincide that magnitude is zero, and the result has NaN components.
//! This is the documented failure mode; check with [`Point2::is_finite`].

use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point or vector in the xy-plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Point2 {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for (f64, f64) {
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Distance between two scalars on the number line, `|b − a|`.
#[must_use]
pub fn distance(a: f64, b: f64) -> f64 {
    (b - a).abs()
}

/// Euclidean distance between two points.
///
/// Symmetric in its arguments, and zero for `distance_2d(a, a)`.
///
/// # Examples
/// ```
/// use u_gamemath::geometry::{distance_2d, Point2};
/// let d = distance_2d(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
#[must_use]
pub fn distance_2d(a: Point2, b: Point2) -> f64 {
    magnitude_2d(b - a)
}

/// Returns `true` if `point` lies inside or on the circle.
///
/// Points exactly on the boundary count as inside.
#[must_use]
pub fn is_point_in_circle(point: Point2, center: Point2, radius: f64) -> bool {
    distance_2d(point, center) <= radius
}

/// Unit vector pointing from `from` towards `to`.
///
/// When `from == to` the displacement has zero length and both components of
/// the result are NaN. The division is not guarded.
///
/// # Examples
/// ```
/// use u_gamemath::geometry::{direction_2d, Point2};
/// let dir = direction_2d(Point2::new(1.0, 1.0), Point2::new(1.0, 5.0));
/// assert_eq!(dir, Point2::new(0.0, 1.0));
///
/// assert!(!direction_2d(Point2::ZERO, Point2::ZERO).is_finite());
/// ```
#[must_use]
pub fn direction_2d(from: Point2, to: Point2) -> Point2 {
    let v = to - from;
    let mag = magnitude_2d(v);
    Point2::new(v.x / mag, v.y / mag)
}

/// Length of a vector, `sqrt(x² + y²)`. Never negative.
#[must_use]
pub fn magnitude_2d(v: Point2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}
