use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::pixel_scale::{HALF_HOUR_MILLIS, MILLIS_PER_HOUR, floor_time};
use super::types::TimeRange;

pub const DEFAULT_DAY_START_HOUR: u8 = 5;
pub const DEFAULT_DAY_END_HOUR_NEXT_DAY: u8 = 6;

/// Display zone used to anchor day windows and time-of-day targets.
///
/// Offsets are fixed: no daylight-saving rules apply. On a DST transition
/// day in the host's civil zone the broadcast-day window keeps the offset
/// passed to the load, so hosts should pass the offset valid for that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GuideTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl GuideTimeZone {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    #[must_use]
    fn offset_millis(self) -> i64 {
        i64::from(self.offset_minutes()) * 60_000
    }

    /// Converts a wall-clock time in this zone to UTC millis.
    #[must_use]
    pub fn local_to_utc_millis(self, local: NaiveDateTime) -> i64 {
        local.and_utc().timestamp_millis() - self.offset_millis()
    }

    /// Converts UTC millis to wall-clock time in this zone.
    #[must_use]
    pub fn utc_millis_to_local(self, utc_millis: i64) -> Option<NaiveDateTime> {
        let local_millis = utc_millis.checked_add(self.offset_millis())?;
        DateTime::<Utc>::from_timestamp_millis(local_millis).map(|time| time.naive_utc())
    }

    /// UTC millis of `hour:00` on `date` in this zone.
    #[must_use]
    pub fn hour_on_date_millis(self, date: NaiveDate, hour: u8) -> i64 {
        let local = date
            .and_hms_opt(u32::from(hour), 0, 0)
            .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
        self.local_to_utc_millis(local)
    }

    /// UTC millis of `hour:00` on the local date containing `utc_millis`.
    #[must_use]
    pub fn hour_on_same_local_day_millis(self, utc_millis: i64, hour: u8) -> Option<i64> {
        let local = self.utc_millis_to_local(utc_millis)?;
        let at_hour = local
            .with_hour(u32::from(hour))?
            .with_minute(0)?
            .with_second(0)?
            .with_nanosecond(0)?;
        Some(self.local_to_utc_millis(at_hour))
    }
}

/// How the normalizer derives the timeline each channel is cut to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelinePolicy {
    /// Broadcast day of the reference date: from `day_start_hour` until
    /// `day_end_hour_next_day` on the following day.
    FixedDay {
        day_start_hour: u8,
        day_end_hour_next_day: u8,
    },
    /// Window of `hours` starting at the half hour just before "now".
    Rolling { hours: u32 },
}

impl Default for TimelinePolicy {
    fn default() -> Self {
        Self::FixedDay {
            day_start_hour: DEFAULT_DAY_START_HOUR,
            day_end_hour_next_day: DEFAULT_DAY_END_HOUR_NEXT_DAY,
        }
    }
}

impl TimelinePolicy {
    #[must_use]
    pub fn resolve_window(
        self,
        reference_date: NaiveDate,
        time_zone: GuideTimeZone,
        now: DateTime<Utc>,
        entry_min_duration_millis: i64,
    ) -> TimeRange {
        match self {
            Self::FixedDay {
                day_start_hour,
                day_end_hour_next_day,
            } => {
                let start = time_zone.hour_on_date_millis(reference_date, day_start_hour);
                let next_day = reference_date.succ_opt().unwrap_or(reference_date);
                let end = time_zone.hour_on_date_millis(next_day, day_end_hour_next_day);
                TimeRange::new(start, end)
            }
            Self::Rolling { hours } => {
                let start = rolling_window_start(now.timestamp_millis(), entry_min_duration_millis);
                let end = start.saturating_add(i64::from(hours).saturating_mul(MILLIS_PER_HOUR));
                TimeRange::new(start, end)
            }
        }
    }
}

/// Half-hour boundary at or before `now - entry_min_duration`.
///
/// Keeping a minimum distance to "now" prevents the airing program from being
/// squeezed below the minimum visible duration at the left edge.
#[must_use]
pub fn rolling_window_start(now_millis: i64, entry_min_duration_millis: i64) -> i64 {
    floor_time(
        now_millis.saturating_sub(entry_min_duration_millis),
        HALF_HOUR_MILLIS,
    )
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use super::{GuideTimeZone, TimelinePolicy, rolling_window_start};
    use crate::core::pixel_scale::MILLIS_PER_HOUR;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date")
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("valid instant")
    }

    #[test]
    fn fixed_day_window_spans_past_midnight() {
        let window = TimelinePolicy::default().resolve_window(
            date(),
            GuideTimeZone::Utc,
            utc(2024, 3, 10, 12, 0),
            120_000,
        );
        assert_eq!(window.start_millis, utc(2024, 3, 10, 5, 0).timestamp_millis());
        assert_eq!(window.end_millis, utc(2024, 3, 11, 6, 0).timestamp_millis());
        assert_eq!(window.span_millis(), 25 * MILLIS_PER_HOUR);
    }

    #[test]
    fn fixed_day_window_honors_offset() {
        let window = TimelinePolicy::default().resolve_window(
            date(),
            GuideTimeZone::FixedOffsetMinutes { minutes: 60 },
            utc(2024, 3, 10, 12, 0),
            120_000,
        );
        assert_eq!(window.start_millis, utc(2024, 3, 10, 4, 0).timestamp_millis());
    }

    #[test]
    fn fixed_offset_ignores_daylight_saving_transitions() {
        // 2024-03-31 is the EU spring-forward day; a fixed +60 keeps 25 hours.
        let transition_day = NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date");
        let window = TimelinePolicy::default().resolve_window(
            transition_day,
            GuideTimeZone::FixedOffsetMinutes { minutes: 60 },
            utc(2024, 3, 31, 12, 0),
            120_000,
        );
        assert_eq!(window.start_millis, utc(2024, 3, 31, 4, 0).timestamp_millis());
        assert_eq!(window.end_millis, utc(2024, 4, 1, 5, 0).timestamp_millis());
        assert_eq!(window.span_millis(), 25 * MILLIS_PER_HOUR);
    }

    #[test]
    fn rolling_window_starts_at_half_hour_before_now() {
        let now = utc(2024, 3, 10, 14, 1);
        let window = TimelinePolicy::Rolling { hours: 6 }.resolve_window(
            date(),
            GuideTimeZone::Utc,
            now,
            120_000,
        );
        assert_eq!(window.start_millis, utc(2024, 3, 10, 13, 30).timestamp_millis());
        assert_eq!(window.span_millis(), 6 * MILLIS_PER_HOUR);
    }

    #[test]
    fn rolling_start_on_boundary_keeps_half_hour() {
        let now = utc(2024, 3, 10, 14, 10).timestamp_millis();
        assert_eq!(
            rolling_window_start(now, 120_000),
            utc(2024, 3, 10, 14, 0).timestamp_millis()
        );
    }

    #[test]
    fn same_local_day_hour_uses_zone() {
        let zone = GuideTimeZone::FixedOffsetMinutes { minutes: -120 };
        let noon_local = zone
            .hour_on_same_local_day_millis(utc(2024, 3, 10, 15, 45).timestamp_millis(), 12)
            .expect("resolvable");
        assert_eq!(noon_local, utc(2024, 3, 10, 14, 0).timestamp_millis());
    }
}
