use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Channel, GuideTimeZone, ScheduleEntry, normalize_schedules};

use super::GuideEngine;

impl<T> GuideEngine<T> {
    /// Replaces the whole dataset using the current wall clock as "now".
    ///
    /// See [`GuideEngine::load_data_at`].
    pub fn load_data(
        &mut self,
        channels: Vec<Channel>,
        entries_by_channel: IndexMap<String, Vec<ScheduleEntry<T>>>,
        reference_date: NaiveDate,
        time_zone: GuideTimeZone,
    ) {
        self.load_data_at(
            channels,
            entries_by_channel,
            reference_date,
            time_zone,
            Utc::now(),
        );
    }

    /// Normalizes and installs a fresh dataset.
    ///
    /// The viewport keeps its width and is re-anchored at the new timeline
    /// start. `TimeRangeUpdated` fires first when that moved the visible
    /// range, then `SchedulesUpdated` always fires.
    pub fn load_data_at(
        &mut self,
        channels: Vec<Channel>,
        entries_by_channel: IndexMap<String, Vec<ScheduleEntry<T>>>,
        reference_date: NaiveDate,
        time_zone: GuideTimeZone,
        now: DateTime<Utc>,
    ) {
        let config = self.core.config;
        let policy_window = config.timeline_policy.resolve_window(
            reference_date,
            time_zone,
            now,
            config.normalization.entry_min_duration_millis,
        );
        let raw_count: usize = entries_by_channel.values().map(Vec::len).sum();
        let normalized = normalize_schedules(
            &channels,
            entries_by_channel,
            policy_window,
            config.normalization,
        );
        debug!(
            %reference_date,
            channels = channels.len(),
            raw_count,
            normalized_count = normalized.entries.values().map(Vec::len).sum::<usize>(),
            "loaded guide data"
        );

        let model = &mut self.core.model;
        model.channels = channels;
        model.entries = normalized.entries;
        model.time_zone = time_zone;
        model.timeline = Some(normalized.timeline);
        let view_moved = model.viewport.replace_window(normalized.timeline);

        if view_moved {
            self.emit_time_range_updated();
        }
        self.emit_schedules_updated();
    }

    /// Drops every channel and entry. The viewport is left untouched.
    pub fn clear_data(&mut self) {
        let model = &mut self.core.model;
        model.channels.clear();
        model.entries.clear();
        model.timeline = None;
        self.emit_schedules_updated();
    }
}
