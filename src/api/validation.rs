use crate::core::{NormalizationRules, PixelScale, TimelinePolicy};
use crate::error::{GuideError, GuideResult};

use super::{GuideEngineConfig, TimeOfDayHours};

pub(super) fn validate_engine_config(config: GuideEngineConfig) -> GuideResult<()> {
    validate_timeline_policy(config.timeline_policy)?;
    validate_normalization_rules(config.normalization)?;
    validate_pixel_scale(config.pixel_scale)?;
    validate_time_of_day_hours(config.time_of_day_hours)
}

pub(super) fn validate_timeline_policy(policy: TimelinePolicy) -> GuideResult<()> {
    match policy {
        TimelinePolicy::FixedDay {
            day_start_hour,
            day_end_hour_next_day,
        } => {
            validate_hour(day_start_hour, "day start hour")?;
            validate_hour(day_end_hour_next_day, "day end hour")
        }
        TimelinePolicy::Rolling { hours } => {
            if hours == 0 {
                return Err(GuideError::InvalidConfig(
                    "rolling window hours must be > 0".to_owned(),
                ));
            }
            Ok(())
        }
    }
}

pub(super) fn validate_normalization_rules(rules: NormalizationRules) -> GuideResult<()> {
    if rules.entry_min_duration_millis <= 0 {
        return Err(GuideError::InvalidConfig(
            "entry minimum duration must be > 0".to_owned(),
        ));
    }
    if rules.max_unaccounted_gap_millis < 0 {
        return Err(GuideError::InvalidConfig(
            "max unaccounted gap must be >= 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_pixel_scale(scale: PixelScale) -> GuideResult<()> {
    if scale.width_per_hour_px == 0 {
        return Err(GuideError::InvalidConfig(
            "pixel scale width per hour must be > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_time_of_day_hours(hours: TimeOfDayHours) -> GuideResult<()> {
    validate_hour(hours.morning_start_hour, "morning start hour")?;
    validate_hour(hours.afternoon_start_hour, "afternoon start hour")?;
    validate_hour(hours.evening_start_hour, "evening start hour")
}

fn validate_hour(hour: u8, name: &str) -> GuideResult<()> {
    if hour > 23 {
        return Err(GuideError::InvalidConfig(format!(
            "{name} must be within 0..=23, got {hour}"
        )));
    }
    Ok(())
}
