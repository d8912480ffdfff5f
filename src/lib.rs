//! # u-gamemath
//!
//! Numeric and array utilities for 2D/3D interactive applications.
//!
//! Every function is a pure, independent computation on plain `f64` values,
//! [`Point2`] pairs or caller-owned slices. There is no shared state beyond
//! the thread-local random generator used by the non-`_with` samplers.
//!
//! ## Modules
//!
//! - [`interpolation`] — Scalar and 2D linear interpolation
//! - [`range`] — Range remapping, clamping, membership and parity
//! - [`geometry`] — Distances, circle containment, direction and magnitude
//! - [`random`] — Uniform integers and floats in a range, seeded generators
//! - [`array`] — Shuffle, sort with companions, linear search, grid indexing
//! - [`angle`] — Degree/radian conversion
//! - [`time`] — `MM:SS` and `HH:MM:SS` duration formatting
//!
//! ## Design Philosophy
//!
//! - **Fail-fast arithmetic**: degenerate inputs produce IEEE non-finite
//!   values instead of errors; only cross-slice preconditions are checked
//! - **Mutate and return**: array functions reorder the caller's slice and
//!   hand it back for chaining
//! - **Property-based testing**: invariants verified via proptest
//!
//! ## Features
//!
//! - `serde` — `Serialize`/`Deserialize` for [`Point2`] and [`GridIndex`]

pub mod angle;
pub mod array;
pub mod geometry;
pub mod interpolation;
pub mod random;
pub mod range;
pub mod time;

pub use angle::{to_degrees, to_radians};
pub use array::{
    index_to_2d, linear_search, shuffle, shuffle_with, sort_ascending, sort_with_companions,
    ArrayError, GridIndex,
};
pub use geometry::{
    direction_2d, distance, distance_2d, is_point_in_circle, magnitude_2d, Point2,
};
pub use interpolation::{lerp, lerp_2d};
pub use random::{
    create_rng, random_float_in_range, random_float_in_range_with, random_int_in_range,
    random_int_in_range_with,
};
pub use range::{clamp, clamp_max, clamp_min, is_even, is_in_range, map_number_to_range};
pub use time::{format_hhmmss, format_mmss};
