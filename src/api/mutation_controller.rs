use tracing::{debug, warn};

use crate::core::{GAP_ENTRY_ID, ScheduleEntry};

use super::GuideEngine;

impl<T: Clone> GuideEngine<T> {
    /// Replaces display data of the first entry sharing `replacement.id`.
    ///
    /// Channels are scanned in configured order. The stored entry keeps its
    /// id, channel, times and original times; clickability, title and payload
    /// come from `replacement`. Returns the updated entry, or `None` when no
    /// entry matches. Gap ids never match. Listeners are not notified.
    pub fn update_entry(&mut self, replacement: ScheduleEntry<T>) -> Option<ScheduleEntry<T>> {
        if replacement.id == GAP_ENTRY_ID {
            debug!("ignoring replacement carrying the gap id");
            return None;
        }
        let ScheduleEntry {
            id,
            original_times,
            is_clickable,
            display_title,
            payload,
            ..
        } = replacement;

        let stored = self
            .core
            .model
            .entries
            .values_mut()
            .flat_map(|list| list.iter_mut())
            .find(|entry| entry.id == id)?;

        if stored.original_times != original_times {
            warn!(
                entry_id = id,
                channel_id = %stored.channel_id,
                stored_start = stored.original_times.start_millis,
                stored_end = stored.original_times.end_millis,
                replacement_start = original_times.start_millis,
                replacement_end = original_times.end_millis,
                "updating entry with different original times; times are kept"
            );
        }
        stored.is_clickable = is_clickable;
        stored.display_title = display_title;
        stored.payload = payload;
        debug!(entry_id = id, channel_id = %stored.channel_id, "entry updated");
        Some(stored.clone())
    }
}
