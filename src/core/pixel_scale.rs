use serde::{Deserialize, Serialize};

pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const HALF_HOUR_MILLIS: i64 = MILLIS_PER_HOUR / 2;

/// Linear time-to-pixel scale of the guide grid, expressed in pixels per hour.
///
/// The scale only feeds derived widths and scroll offsets; no normalization
/// invariant depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelScale {
    pub width_per_hour_px: u32,
}

impl Default for PixelScale {
    fn default() -> Self {
        Self {
            width_per_hour_px: 600,
        }
    }
}

impl PixelScale {
    #[must_use]
    pub fn new(width_per_hour_px: u32) -> Self {
        Self { width_per_hour_px }
    }

    #[must_use]
    pub fn millis_to_pixels(self, millis: i64) -> i64 {
        let scaled = i128::from(millis) * i128::from(self.width_per_hour_px)
            / i128::from(MILLIS_PER_HOUR);
        saturate_i128(scaled)
    }

    /// Width of `[start, end)` in pixels.
    ///
    /// Both edges are converted first so adjacent entries never accumulate
    /// rounding drift.
    #[must_use]
    pub fn span_to_pixels(self, start_millis: i64, end_millis: i64) -> i64 {
        self.millis_to_pixels(end_millis)
            .saturating_sub(self.millis_to_pixels(start_millis))
    }

    /// Returns `0` for a zero scale instead of dividing by zero.
    #[must_use]
    pub fn pixels_to_millis(self, pixels: i64) -> i64 {
        if self.width_per_hour_px == 0 {
            return 0;
        }
        let scaled =
            i128::from(pixels) * i128::from(MILLIS_PER_HOUR) / i128::from(self.width_per_hour_px);
        saturate_i128(scaled)
    }
}

/// Floors `time_millis` to a multiple of `unit_millis` (e.g. 5:32:11 → 5:00:00 for one hour).
#[must_use]
pub fn floor_time(time_millis: i64, unit_millis: i64) -> i64 {
    if unit_millis <= 0 {
        return time_millis;
    }
    time_millis - time_millis.rem_euclid(unit_millis)
}

fn saturate_i128(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
