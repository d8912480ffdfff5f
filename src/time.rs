//! Clock-style formatting of durations given in seconds.
//!
//! Components are floored, never rounded: `59.9` seconds prints as `00:59`.
//! Each component is zero-padded to two digits; a component that needs more
//! digits (`100` minutes) is printed in full, however large.
//!
//! NaN and infinite durations print as `00:00`.

/// Formats a duration as `MM:SS`.
///
/// Zero, negative, NaN and infinite durations all print as `00:00`. Durations of an
/// hour or more keep counting minutes past 59.
///
/// # Examples
/// ```
/// use u_gamemath::time::format_mmss;
/// assert_eq!(format_mmss(0.0), "00:00");
/// assert_eq!(format_mmss(65.0), "01:05");
/// assert_eq!(format_mmss(3725.0), "62:05");
/// ```
#[must_use]
pub fn format_mmss(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::from("00:00");
    }
    let minutes = (seconds / 60.0).floor();
    let secs = (seconds - minutes * 60.0).floor().max(0.0);
    format!("{minutes:02.0}:{secs:02.0}")
}

/// Formats a duration as `HH:MM:SS`.
///
/// Durations shorter than one hour fall back to [`format_mmss`], so the hour
/// field only appears when it is non-zero.
///
/// # Examples
/// ```
/// use u_gamemath::time::format_hhmmss;
/// assert_eq!(format_hhmmss(3661.0), "01:01:01");
/// assert_eq!(format_hhmmss(59.0), "00:59");
/// ```
#[must_use]
pub fn format_hhmmss(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor();
    if !hours.is_finite() || hours <= 0.0 {
        return format_mmss(seconds);
    }
    let minutes = ((seconds - hours * 3600.0) / 60.0).floor().max(0.0);
    let secs = (seconds - hours * 3600.0 - minutes * 60.0).floor().max(0.0);
    format!("{hours:02.0}:{minutes:02.0}:{secs:02.0}")
}
