//! Additive brightness shifts.
//!
//! Every channel moves by the same rounded pixel delta `round(255 * percent)`
//! and is clamped to `[0, 255]` on its own. Channels can therefore clip at
//! different points, which shifts hue at the extremes.

use crate::color::Color;

/// Rounded pixel delta for a fraction.
///
/// Rounds half up (`floor(x + 0.5)`), so `-0.5` becomes `0`. The float to int
/// conversion saturates: `NaN` yields `0`, infinities yield `i32::MIN`/`i32::MAX`.
pub fn pixel_delta(percent: f64) -> i32 {
    (255.0 * percent + 0.5).floor() as i32
}

fn shift(channel: u8, delta: i32) -> u8 {
    i32::from(channel).saturating_add(delta).clamp(0, 255) as u8
}

fn shift_all(color: Color, delta: i32) -> Color {
    Color(
        shift(color.0, delta),
        shift(color.1, delta),
        shift(color.2, delta),
    )
}

/// Add `round(255 * percent)` to each channel, clamped at 255.
///
/// `percent` outside `[0, 1]` is accepted; a negative value darkens, still
/// clamped at 0.
pub fn lighten(color: Color, percent: f64) -> Color {
    shift_all(color, pixel_delta(percent))
}

/// Subtract `round(255 * percent)` from each channel, clamped at 0.
pub fn darken(color: Color, percent: f64) -> Color {
    shift_all(color, pixel_delta(percent).saturating_neg())
}
