//! Range remapping, clamping and membership tests.
//!
//! # Preconditions
//!
//! - [`map_number_to_range`] requires a non-degenerate source interval.
//!   With `from_min == from_max` the slope divides by zero and the result is
//!   non-finite (∞ or NaN). No error is raised.
//! - [`clamp`] requires `min <= max`. With an inverted interval the lower
//!   bound is tested first, so the result is unspecified beyond "one of the
//!   three inputs". It is not reordered to make sense.

/// Linearly remaps `s` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// Computes `to_min + ((s − from_min) / (from_max − from_min))·(to_max − to_min)`.
/// Inputs outside the source interval map outside the target interval.
///
/// # Examples
/// ```
/// use u_gamemath::range::map_number_to_range;
/// assert_eq!(map_number_to_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(map_number_to_range(0.25, 0.0, 1.0, 100.0, 200.0), 125.0);
///
/// // Degenerate source interval.
/// assert!(!map_number_to_range(1.0, 2.0, 2.0, 0.0, 1.0).is_finite());
/// ```
#[must_use]
pub fn map_number_to_range(s: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    to_min + ((s - from_min) / (from_max - from_min)) * (to_max - to_min)
}

/// Clamps `v` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; see the module docs for the
/// `min > max` case. NaN `v` is returned unchanged.
#[must_use]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Caps `v` at `max`.
#[must_use]
pub fn clamp_max(v: f64, max: f64) -> f64 {
    if v > max {
        max
    } else {
        v
    }
}

/// Raises `v` to at least `min`.
#[must_use]
pub fn clamp_min(v: f64, min: f64) -> f64 {
    if v < min {
        min
    } else {
        v
    }
}

/// Returns `true` if `min <= v <= max`. Both bounds are inclusive.
#[must_use]
pub fn is_in_range(v: f64, min: f64, max: f64) -> bool {
    min <= v && v <= max
}

/// Returns `true` if `n` is divisible by two.
///
/// Uses Rust's truncated remainder, which is still zero for negative even
/// numbers: `is_even(-4)` is `true`, `is_even(-3)` is `false`.
#[must_use]
pub const fn is_even(n: i64) -> bool {
    n % 2 == 0
}
