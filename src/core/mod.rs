pub mod entry;
pub mod normalizer;
pub mod pixel_scale;
pub mod timeline_policy;
pub mod types;
pub mod viewport;

pub use entry::{EntryId, GAP_ENTRY_ID, OPEN_END_MILLIS, OriginalTimes, ScheduleEntry};
pub use normalizer::{
    DEFAULT_ENTRY_MIN_DURATION_MILLIS, DEFAULT_MAX_UNACCOUNTED_GAP_MILLIS, NormalizationRules,
    NormalizedSchedules, enforce_min_duration, normalize_channel, normalize_schedules,
    resolve_dataset_timeline,
};
pub use pixel_scale::{HALF_HOUR_MILLIS, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, PixelScale, floor_time};
pub use timeline_policy::{
    DEFAULT_DAY_END_HOUR_NEXT_DAY, DEFAULT_DAY_START_HOUR, GuideTimeZone, TimelinePolicy,
    rolling_window_start,
};
pub use types::{Channel, TimeRange, TimelineBounds};
pub use viewport::{JumpOutcome, TimelineViewport};
