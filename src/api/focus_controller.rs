use crate::core::ScheduleEntry;

use super::GuideEngine;
use super::focus_resolver::{FocusRequest, resolve_focus_index};

impl<T> GuideEngine<T> {
    /// Focus request spanning the whole visible range, used when focus enters
    /// the grid without a previous cell.
    #[must_use]
    pub fn default_focus_request(&self, now_millis: i64) -> FocusRequest {
        FocusRequest::new(self.core.model.viewport.view(), now_millis)
    }

    /// Index of the entry of `channel_id` that should receive focus.
    #[must_use]
    pub fn resolve_focus_index(&self, channel_id: &str, request: &FocusRequest) -> Option<usize> {
        let entries = self.core.model.channel_entries(channel_id)?;
        resolve_focus_index(entries, self.core.model.viewport.view(), request)
    }

    #[must_use]
    pub fn resolve_focus_entry(
        &self,
        channel_id: &str,
        request: &FocusRequest,
    ) -> Option<&ScheduleEntry<T>> {
        let index = self.resolve_focus_index(channel_id, request)?;
        self.entry_at(channel_id, index)
    }
}
