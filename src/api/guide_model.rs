use indexmap::IndexMap;

use crate::core::{Channel, GuideTimeZone, ScheduleEntry, TimeRange, TimelineViewport};

/// Per-dataset guide state.
///
/// Channels and entries are replaced wholesale by each load; entries keep
/// channel order so mutation scans are deterministic.
pub(super) struct GuideModel<T> {
    pub(super) channels: Vec<Channel>,
    pub(super) entries: IndexMap<String, Vec<ScheduleEntry<T>>>,
    pub(super) viewport: TimelineViewport,
    pub(super) time_zone: GuideTimeZone,
    pub(super) timeline: Option<TimeRange>,
}

impl<T> GuideModel<T> {
    #[must_use]
    pub(super) fn empty() -> Self {
        Self {
            channels: Vec::new(),
            entries: IndexMap::new(),
            viewport: TimelineViewport::new(),
            time_zone: GuideTimeZone::default(),
            timeline: None,
        }
    }

    #[must_use]
    pub(super) fn channel_entries(&self, channel_id: &str) -> Option<&[ScheduleEntry<T>]> {
        self.entries.get(channel_id).map(Vec::as_slice)
    }
}
