use crate::extensions::GuideListener;

/// Runtime orchestration state grouped separately from the dataset model.
pub(super) struct GuideRuntimeState {
    pub(super) listeners: Vec<Box<dyn GuideListener>>,
}

impl GuideRuntimeState {
    #[must_use]
    pub(super) fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}
