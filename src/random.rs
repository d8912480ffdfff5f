//! Uniform random numbers in a caller-chosen range.
//!
//! Every sampler comes in two forms: a plain one that draws from the
//! thread-local generator (`rand::rng()`), and a `_with` variant that takes
//! an explicit generator so gameplay code and tests can replay a sequence.
//!
//! # Reproducibility
//!
//! For reproducible runs, use [`create_rng`] with a fixed seed and the
//! `_with` variants. The underlying algorithm (SmallRng) is deterministic
//! for a given seed on the same platform.
//!
//! # Thread safety
//!
//! The thread-local generator is per-thread, so the plain variants can be
//! called from any call site without extra synchronization.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_gamemath::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
#[must_use]
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Returns a uniformly distributed integer in the inclusive range `[min, max]`.
///
/// Draws from the thread-local generator. See [`random_int_in_range_with`].
///
/// # Panics
/// Panics if `min > max`.
///
/// # Examples
/// ```
/// use u_gamemath::random::random_int_in_range;
/// let roll = random_int_in_range(1, 6);
/// assert!((1..=6).contains(&roll));
/// ```
#[must_use]
pub fn random_int_in_range(min: i64, max: i64) -> i64 {
    random_int_in_range_with(min, max, &mut rand::rng())
}

/// Returns a uniformly distributed integer in `[min, max]` drawn from `rng`.
///
/// Both bounds are reachable. `min == max` always yields `min`.
///
/// # Panics
/// Panics if `min > max`.
pub fn random_int_in_range_with<R: Rng>(min: i64, max: i64, rng: &mut R) -> i64 {
    assert!(min <= max, "empty integer range: min {min} > max {max}");
    rng.random_range(min..=max)
}

/// Returns a uniformly distributed float in the half-open range `[min, max)`.
///
/// Draws from the thread-local generator. See [`random_float_in_range_with`].
///
/// # Panics
/// Panics if `min > max` or either bound is not finite.
///
/// # Examples
/// ```
/// use u_gamemath::random::random_float_in_range;
/// let x = random_float_in_range(-1.0, 1.0);
/// assert!((-1.0..1.0).contains(&x));
/// ```
#[must_use]
pub fn random_float_in_range(min: f64, max: f64) -> f64 {
    random_float_in_range_with(min, max, &mut rand::rng())
}

/// Returns a uniformly distributed float in `[min, max)` drawn from `rng`.
///
/// A degenerate range (`min == max`) yields `min`.
///
/// Samples `(1 − u)·min + u·max` for a unit draw `u`, which stays finite for
/// any finite bounds even when `max − min` overflows. Draws that round up to
/// `max` on ranges only a few ULPs wide are rejected and redrawn; `u = 0`
/// always lands on `min`, so the loop terminates.
///
/// # Panics
/// Panics if `min > max` or either bound is not finite.
pub fn random_float_in_range_with<R: Rng>(min: f64, max: f64, rng: &mut R) -> f64 {
    assert!(
        min.is_finite() && max.is_finite(),
        "float range bounds must be finite: [{min}, {max})"
    );
    assert!(min <= max, "empty float range: min {min} > max {max}");
    if min == max {
        return min;
    }
    loop {
        let u: f64 = rng.random();
        let v = ((1.0 - u) * min + u * max).max(min);
        if v < max {
            return v;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
