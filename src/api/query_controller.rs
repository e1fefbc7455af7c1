use chrono::Utc;

use crate::core::{Channel, ScheduleEntry};

use super::GuideEngine;

impl<T> GuideEngine<T> {
    /// Entry at `index` of a channel's normalized timeline.
    ///
    /// Gaps are returned like any other entry; check [`ScheduleEntry::is_gap`].
    #[must_use]
    pub fn entry_at(&self, channel_id: &str, index: usize) -> Option<&ScheduleEntry<T>> {
        self.core.model.channel_entries(channel_id)?.get(index)
    }

    /// Index of the entry covering `time_millis` within `[start, end)`.
    #[must_use]
    pub fn index_at_time(&self, channel_id: &str, time_millis: i64) -> Option<usize> {
        self.core
            .model
            .channel_entries(channel_id)?
            .iter()
            .position(|entry| entry.contains(time_millis))
    }

    /// Number of normalized entries of a channel, `0` for unknown channels.
    #[must_use]
    pub fn entry_count(&self, channel_id: &str) -> usize {
        self.core
            .model
            .channel_entries(channel_id)
            .map_or(0, <[_]>::len)
    }

    #[must_use]
    pub fn channel_entries(&self, channel_id: &str) -> Option<&[ScheduleEntry<T>]> {
        self.core.model.channel_entries(channel_id)
    }

    /// Program airing right now on `channel_id`, or on the first channel.
    #[must_use]
    pub fn current_program(&self, channel_id: Option<&str>) -> Option<&ScheduleEntry<T>> {
        self.current_program_at(channel_id, Utc::now().timestamp_millis())
    }

    /// Entry airing at `now_millis` on `channel_id` (first channel when `None`).
    ///
    /// Falls back to the latest entry that already started when nothing
    /// covers `now_millis`, e.g. past the end of the timeline.
    #[must_use]
    pub fn current_program_at(
        &self,
        channel_id: Option<&str>,
        now_millis: i64,
    ) -> Option<&ScheduleEntry<T>> {
        let channel_id = match channel_id {
            Some(id) => id,
            None => self.core.model.channels.first()?.id.as_str(),
        };
        let mut best_match = None;
        for entry in self.core.model.channel_entries(channel_id)? {
            if entry.start_millis > now_millis {
                break;
            }
            if now_millis < entry.end_millis {
                return Some(entry);
            }
            best_match = Some(entry);
        }
        best_match
    }

    /// Position of a channel in the configured channel order.
    #[must_use]
    pub fn channel_index(&self, channel_id: &str) -> Option<usize> {
        self.core
            .model
            .channels
            .iter()
            .position(|channel| channel.id == channel_id)
    }

    #[must_use]
    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.core.model.channels.get(index)
    }

    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.core.model.channels
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.core.model.channels.len()
    }
}
