use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::core::{
    GuideTimeZone, HALF_HOUR_MILLIS, PixelScale, TimeRange, floor_time, rolling_window_start,
};

use super::TimeOfDayHours;

/// Part of the day a time-of-day filter jumps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Classifies a local hour. Hours before the afternoon start count as morning.
    #[must_use]
    pub fn from_local_hour(hour: u8, hours: TimeOfDayHours) -> Self {
        if hour < hours.afternoon_start_hour {
            Self::Morning
        } else if hour < hours.evening_start_hour {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    #[must_use]
    pub fn start_hour(self, hours: TimeOfDayHours) -> u8 {
        match self {
            Self::Morning => hours.morning_start_hour,
            Self::Afternoon => hours.afternoon_start_hour,
            Self::Evening => hours.evening_start_hour,
        }
    }
}

/// Placement of the time ruler above the grid.
///
/// The ruler starts on a half hour at or before the window start; the grid
/// rows start at the window start, so the ruler is shifted left by
/// `adjustment_px` to line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRuler {
    pub origin_millis: i64,
    pub adjustment_millis: i64,
    pub adjustment_px: i64,
}

pub(super) fn resolve_initial_range(
    grid_width_px: u32,
    now_millis: i64,
    entry_min_duration_millis: i64,
    scale: PixelScale,
) -> TimeRange {
    let width_millis = scale.pixels_to_millis(i64::from(grid_width_px));
    let start = rolling_window_start(now_millis, entry_min_duration_millis);
    TimeRange::new(start, start.saturating_add(width_millis))
}

pub(super) fn resolve_timeline_ruler(
    window_start_millis: i64,
    entry_min_duration_millis: i64,
    scale: PixelScale,
) -> TimelineRuler {
    let origin_millis = floor_time(
        window_start_millis.saturating_sub(entry_min_duration_millis),
        HALF_HOUR_MILLIS,
    );
    let adjustment_millis = window_start_millis.saturating_sub(origin_millis);
    TimelineRuler {
        origin_millis,
        adjustment_millis,
        adjustment_px: scale.millis_to_pixels(adjustment_millis),
    }
}

/// Both window edges count as inside.
pub(super) fn window_contains_now(window: TimeRange, now_millis: i64) -> bool {
    window.start_millis <= now_millis && now_millis <= window.end_millis
}

/// Start of `time_of_day` on the local date of the window midpoint.
pub(super) fn resolve_time_of_day_target(
    window: TimeRange,
    time_zone: GuideTimeZone,
    time_of_day: TimeOfDay,
    hours: TimeOfDayHours,
) -> Option<i64> {
    time_zone.hour_on_same_local_day_millis(window.midpoint(), time_of_day.start_hour(hours))
}

pub(super) fn resolve_time_of_day_at(
    time_millis: i64,
    time_zone: GuideTimeZone,
    hours: TimeOfDayHours,
) -> Option<TimeOfDay> {
    let local = time_zone.utc_millis_to_local(time_millis)?;
    let hour = u8::try_from(local.hour()).ok()?;
    Some(TimeOfDay::from_local_hour(hour, hours))
}
