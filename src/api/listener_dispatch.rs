use tracing::{debug, trace};

use crate::extensions::{GuideEvent, ListenerDisposition};

use super::GuideEngine;

impl<T> GuideEngine<T> {
    /// Delivers `event` to every registered listener.
    ///
    /// Detach requests are collected during the pass and applied after it, so
    /// every listener registered when the pass started sees the event once.
    pub(super) fn emit_guide_event(&mut self, event: GuideEvent) {
        let listeners = &mut self.core.runtime.listeners;
        trace!(?event, listeners = listeners.len(), "dispatching guide event");

        let dispositions: Vec<ListenerDisposition> = listeners
            .iter_mut()
            .map(|listener| listener.on_event(event))
            .collect();

        if !dispositions.contains(&ListenerDisposition::Detach) {
            return;
        }
        let mut dispositions = dispositions.into_iter();
        listeners.retain(|listener| {
            let keep = dispositions.next() != Some(ListenerDisposition::Detach);
            if !keep {
                debug!(listener_id = listener.id(), "listener detached");
            }
            keep
        });
    }

    pub(super) fn emit_time_range_updated(&mut self) {
        self.emit_guide_event(GuideEvent::TimeRangeUpdated);
    }

    pub(super) fn emit_schedules_updated(&mut self) {
        self.emit_guide_event(GuideEvent::SchedulesUpdated);
    }
}
