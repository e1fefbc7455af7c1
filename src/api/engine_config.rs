use serde::{Deserialize, Serialize};

use crate::core::{NormalizationRules, PixelScale, TimelinePolicy};
use crate::error::{GuideError, GuideResult};

/// Local hours the time-of-day filters jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayHours {
    pub morning_start_hour: u8,
    pub afternoon_start_hour: u8,
    pub evening_start_hour: u8,
}

impl Default for TimeOfDayHours {
    fn default() -> Self {
        Self {
            morning_start_hour: 6,
            afternoon_start_hour: 12,
            evening_start_hour: 19,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load guide setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuideEngineConfig {
    #[serde(default)]
    pub timeline_policy: TimelinePolicy,
    #[serde(default)]
    pub normalization: NormalizationRules,
    #[serde(default)]
    pub pixel_scale: PixelScale,
    #[serde(default)]
    pub time_of_day_hours: TimeOfDayHours,
}

impl GuideEngineConfig {
    /// Creates a config with the fixed broadcast-day policy and default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how each load derives its timeline.
    #[must_use]
    pub fn with_timeline_policy(mut self, policy: TimelinePolicy) -> Self {
        self.timeline_policy = policy;
        self
    }

    /// Shortcut for a rolling window of `hours` starting near "now".
    #[must_use]
    pub fn with_rolling_window_hours(mut self, hours: u32) -> Self {
        self.timeline_policy = TimelinePolicy::Rolling { hours };
        self
    }

    #[must_use]
    pub fn with_normalization_rules(mut self, rules: NormalizationRules) -> Self {
        self.normalization = rules;
        self
    }

    #[must_use]
    pub fn with_pixel_scale(mut self, scale: PixelScale) -> Self {
        self.pixel_scale = scale;
        self
    }

    #[must_use]
    pub fn with_time_of_day_hours(mut self, hours: TimeOfDayHours) -> Self {
        self.time_of_day_hours = hours;
        self
    }

    /// Parses a config from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(input: &str) -> GuideResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GuideError::InvalidConfig(format!("failed to parse config: {e}")))
    }

    pub fn to_json_pretty(&self) -> GuideResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GuideError::Serialization(format!("failed to serialize config: {e}")))
    }
}
