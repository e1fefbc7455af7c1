use crate::core::{GuideTimeZone, NormalizationRules, PixelScale, TimeRange, TimelinePolicy};

use super::{GuideEngine, GuideEngineConfig};

impl<T> GuideEngine<T> {
    #[must_use]
    pub fn config(&self) -> GuideEngineConfig {
        self.core.config
    }

    #[must_use]
    pub fn timeline_policy(&self) -> TimelinePolicy {
        self.core.config.timeline_policy
    }

    #[must_use]
    pub fn normalization_rules(&self) -> NormalizationRules {
        self.core.config.normalization
    }

    #[must_use]
    pub fn pixel_scale(&self) -> PixelScale {
        self.core.config.pixel_scale
    }

    /// Display zone of the last load.
    #[must_use]
    pub fn time_zone(&self) -> GuideTimeZone {
        self.core.model.time_zone
    }

    /// Timeline every channel was normalized to, `None` before the first load.
    #[must_use]
    pub fn timeline(&self) -> Option<TimeRange> {
        self.core.model.timeline
    }
}
