use serde::{Deserialize, Serialize};

/// Change notifications emitted by the guide engine.
///
/// Events carry no payload; listeners query the engine for the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuideEvent {
    /// A load replaced every channel's schedule.
    SchedulesUpdated,
    /// The visible range moved.
    TimeRangeUpdated,
}

/// What the engine should do with a listener after it handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListenerDisposition {
    #[default]
    Keep,
    /// Remove the listener once the current dispatch pass completes.
    Detach,
}

/// Observer of guide changes.
///
/// Listeners cannot touch the engine while it dispatches; a listener that
/// wants to stop observing answers [`ListenerDisposition::Detach`].
pub trait GuideListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: GuideEvent) -> ListenerDisposition;
}
