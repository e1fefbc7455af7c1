use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pixel_scale::PixelScale;
use super::types::TimeRange;

/// Identifier of a schedule entry. Unique across the dataset for real programs.
pub type EntryId = i64;

/// Reserved id shared by every synthetic gap entry.
pub const GAP_ENTRY_ID: EntryId = -1;

/// Raw end value meaning "unknown end, open on the right".
pub const OPEN_END_MILLIS: i64 = i64::MAX;

/// Times as provided by the host, before the normalizer clipped or extended them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OriginalTimes {
    pub start_millis: i64,
    pub end_millis: i64,
}

impl OriginalTimes {
    #[must_use]
    pub fn new(start_millis: i64, end_millis: i64) -> Self {
        Self {
            start_millis,
            end_millis,
        }
    }
}

/// One slot of a channel timeline: a real program or a synthetic gap.
///
/// `payload` is host-owned data; an entry without payload is a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry<T> {
    pub id: EntryId,
    pub channel_id: String,
    pub start_millis: i64,
    pub end_millis: i64,
    pub original_times: OriginalTimes,
    pub is_clickable: bool,
    pub display_title: Option<String>,
    pub payload: Option<T>,
}

impl<T> ScheduleEntry<T> {
    /// Creates a program entry whose original times equal its current times.
    #[must_use]
    pub fn program(
        id: EntryId,
        channel_id: impl Into<String>,
        start_millis: i64,
        end_millis: i64,
        display_title: impl Into<String>,
        payload: T,
    ) -> Self {
        Self {
            id,
            channel_id: channel_id.into(),
            start_millis,
            end_millis,
            original_times: OriginalTimes::new(start_millis, end_millis),
            is_clickable: true,
            display_title: Some(display_title.into()),
            payload: Some(payload),
        }
    }

    /// Creates a program entry from chrono instants.
    #[must_use]
    pub fn from_datetimes(
        id: EntryId,
        channel_id: impl Into<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        display_title: impl Into<String>,
        payload: T,
    ) -> Self {
        Self::program(
            id,
            channel_id,
            starts_at.timestamp_millis(),
            ends_at.timestamp_millis(),
            display_title,
            payload,
        )
    }

    /// Creates a synthetic gap covering `[from_millis, to_millis)`.
    #[must_use]
    pub fn gap(channel_id: impl Into<String>, from_millis: i64, to_millis: i64) -> Self {
        Self {
            id: GAP_ENTRY_ID,
            channel_id: channel_id.into(),
            start_millis: from_millis,
            end_millis: to_millis,
            original_times: OriginalTimes::new(from_millis, to_millis),
            is_clickable: false,
            display_title: None,
            payload: None,
        }
    }

    #[must_use]
    pub fn with_clickable(mut self, is_clickable: bool) -> Self {
        self.is_clickable = is_clickable;
        self
    }

    #[must_use]
    pub fn with_original_times(mut self, original_times: OriginalTimes) -> Self {
        self.original_times = original_times;
        self
    }

    #[must_use]
    pub fn is_gap(&self) -> bool {
        self.payload.is_none()
    }

    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start_millis, self.end_millis)
    }

    #[must_use]
    pub fn duration_millis(&self) -> i64 {
        self.time_range().span_millis()
    }

    #[must_use]
    pub fn contains(&self, time_millis: i64) -> bool {
        self.time_range().contains(time_millis)
    }

    /// Inclusive on both ends, so a program ending exactly now still counts.
    #[must_use]
    pub fn is_airing_at(&self, now_millis: i64) -> bool {
        self.start_millis <= now_millis && now_millis <= self.end_millis
    }

    /// `start <= 0` marks a listing whose start is unknown.
    #[must_use]
    pub fn is_left_open(&self) -> bool {
        self.start_millis <= 0
    }

    #[must_use]
    pub fn is_right_open(&self) -> bool {
        self.end_millis == OPEN_END_MILLIS
    }

    #[must_use]
    pub fn width_pixels(&self, scale: PixelScale) -> i64 {
        scale.span_to_pixels(self.start_millis, self.end_millis)
    }

    /// Moves the current times; original times are left untouched.
    #[must_use]
    pub(crate) fn with_times(mut self, start_millis: i64, end_millis: i64) -> Self {
        self.start_millis = start_millis;
        self.end_millis = end_millis;
        self
    }

    /// Turns an open-ended listing into a gap over the same raw interval.
    #[must_use]
    pub(crate) fn to_gap(&self) -> Self {
        Self::gap(self.channel_id.clone(), self.start_millis, self.end_millis)
    }
}
