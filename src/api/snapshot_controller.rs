use crate::error::{GuideError, GuideResult};

use super::{ChannelSnapshot, EntrySnapshot, GuideEngine, GuideSnapshot};

impl<T> GuideEngine<T> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> GuideSnapshot {
        let model = &self.core.model;
        let scale = self.core.config.pixel_scale;
        let channels = model
            .channels
            .iter()
            .map(|channel| ChannelSnapshot {
                channel: channel.clone(),
                entries: model
                    .channel_entries(&channel.id)
                    .unwrap_or_default()
                    .iter()
                    .map(|entry| EntrySnapshot::from_entry(entry, scale))
                    .collect(),
            })
            .collect();
        GuideSnapshot {
            config: self.core.config,
            bounds: model.viewport.bounds(),
            timeline: model.timeline,
            time_zone: model.time_zone,
            channels,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> GuideResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| GuideError::Serialization(format!("failed to serialize snapshot: {e}")))
    }
}
