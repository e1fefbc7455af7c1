use serde::{Deserialize, Serialize};

use crate::core::{
    Channel, EntryId, GuideTimeZone, OriginalTimes, PixelScale, ScheduleEntry, TimeRange,
    TimelineBounds,
};

use super::GuideEngineConfig;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
///
/// Payloads are host-owned and left out; entries are described by their
/// timing and display fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSnapshot {
    pub config: GuideEngineConfig,
    pub bounds: TimelineBounds,
    pub timeline: Option<TimeRange>,
    pub time_zone: GuideTimeZone,
    pub channels: Vec<ChannelSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    pub channel: Channel,
    pub entries: Vec<EntrySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySnapshot {
    pub id: EntryId,
    pub start_millis: i64,
    pub end_millis: i64,
    pub original_times: OriginalTimes,
    pub is_gap: bool,
    pub is_clickable: bool,
    pub display_title: Option<String>,
    pub width_px: i64,
}

impl EntrySnapshot {
    pub(super) fn from_entry<T>(entry: &ScheduleEntry<T>, scale: PixelScale) -> Self {
        Self {
            id: entry.id,
            start_millis: entry.start_millis,
            end_millis: entry.end_millis,
            original_times: entry.original_times,
            is_gap: entry.is_gap(),
            is_clickable: entry.is_clickable,
            display_title: entry.display_title.clone(),
            width_px: entry.width_pixels(scale),
        }
    }
}
