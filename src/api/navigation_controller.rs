use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{EntryId, TimeRange};

use super::GuideEngine;
use super::navigation_target_resolver::{
    TimeOfDay, TimelineRuler, resolve_initial_range, resolve_time_of_day_at,
    resolve_time_of_day_target, resolve_timeline_ruler, window_contains_now,
};

/// Input of [`GuideEngine::auto_scroll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoScrollRequest {
    /// Channel whose current program is targeted; first channel when `None`.
    pub channel_id: Option<String>,
    /// Forces a jump to the start of this part of the day.
    pub time_of_day: Option<TimeOfDay>,
    pub now_millis: i64,
}

impl AutoScrollRequest {
    /// Scroll to whatever is live, falling back to the part of the day shown.
    #[must_use]
    pub fn live(now_millis: i64) -> Self {
        Self {
            channel_id: None,
            time_of_day: None,
            now_millis,
        }
    }

    #[must_use]
    pub fn time_of_day(time_of_day: TimeOfDay, now_millis: i64) -> Self {
        Self {
            channel_id: None,
            time_of_day: Some(time_of_day),
            now_millis,
        }
    }

    #[must_use]
    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }
}

/// What [`GuideEngine::auto_scroll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoScrollOutcome {
    /// The view jumped to the start of the airing program.
    JumpedToCurrentProgram { entry_id: EntryId, target_millis: i64 },
    /// The view already starts at the airing program; the host should focus it.
    FocusCurrentProgram { entry_id: EntryId },
    /// The view jumped to the start of a part of the day.
    JumpedToTimeOfDay {
        time_of_day: TimeOfDay,
        target_millis: i64,
    },
    /// The view already starts at the requested part of the day.
    AlreadyAtTimeOfDay {
        time_of_day: TimeOfDay,
        target_millis: i64,
    },
    /// "Now" is inside the window but the channel is unknown or has no
    /// entry that already started.
    NoCurrentProgram,
    /// No target could be resolved.
    Unresolved,
}

/// Result of [`GuideEngine::scroll_to_channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelScrollOutcome {
    pub channel_index: usize,
    pub scroll: AutoScrollOutcome,
}

impl<T> GuideEngine<T> {
    /// Range a grid of `grid_width_px` shows when the guide opens at `now_millis`.
    #[must_use]
    pub fn initial_range_for_grid_width(&self, grid_width_px: u32, now_millis: i64) -> TimeRange {
        let config = self.core.config;
        resolve_initial_range(
            grid_width_px,
            now_millis,
            config.normalization.entry_min_duration_millis,
            config.pixel_scale,
        )
    }

    /// Applies [`GuideEngine::initial_range_for_grid_width`].
    pub fn set_initial_range_for_grid_width(&mut self, grid_width_px: u32, now_millis: i64) -> bool {
        let range = self.initial_range_for_grid_width(grid_width_px, now_millis);
        self.set_initial_range(range.start_millis, range.end_millis)
    }

    /// Scrolls to the most relevant program.
    ///
    /// Without a time-of-day request and with "now" inside the window, the
    /// view jumps to the airing program. Otherwise it jumps to the start of
    /// the requested part of the day, or of the part currently shown, on the
    /// local date of the window midpoint.
    pub fn auto_scroll(&mut self, request: AutoScrollRequest) -> AutoScrollOutcome {
        let window = self.core.model.viewport.window();

        let time_of_day = match request.time_of_day {
            Some(time_of_day) => time_of_day,
            None if window_contains_now(window, request.now_millis) => {
                return self.scroll_to_current_program(
                    request.channel_id.as_deref(),
                    request.now_millis,
                );
            }
            None => match self.visible_time_of_day() {
                Some(time_of_day) => time_of_day,
                None => return AutoScrollOutcome::Unresolved,
            },
        };

        let Some(target_millis) = resolve_time_of_day_target(
            window,
            self.core.model.time_zone,
            time_of_day,
            self.core.config.time_of_day_hours,
        ) else {
            warn!(?time_of_day, "cannot resolve time of day target");
            return AutoScrollOutcome::Unresolved;
        };
        debug!(?time_of_day, target_millis, "scrolling to time of day");
        if self.jump_to(target_millis) {
            AutoScrollOutcome::JumpedToTimeOfDay {
                time_of_day,
                target_millis,
            }
        } else {
            AutoScrollOutcome::AlreadyAtTimeOfDay {
                time_of_day,
                target_millis,
            }
        }
    }

    /// Scrolls to the airing program of `channel_id`.
    ///
    /// Returns `None` for an unknown channel.
    pub fn scroll_to_channel(
        &mut self,
        channel_id: &str,
        now_millis: i64,
    ) -> Option<ChannelScrollOutcome> {
        let channel_index = self.channel_index(channel_id)?;
        let scroll =
            self.auto_scroll(AutoScrollRequest::live(now_millis).with_channel(channel_id));
        Some(ChannelScrollOutcome {
            channel_index,
            scroll,
        })
    }

    /// Part of the day the visible start falls in, in the display zone.
    #[must_use]
    pub fn visible_time_of_day(&self) -> Option<TimeOfDay> {
        resolve_time_of_day_at(
            self.core.model.viewport.view().start_millis,
            self.core.model.time_zone,
            self.core.config.time_of_day_hours,
        )
    }

    /// Local date of the visible start, in the display zone.
    #[must_use]
    pub fn visible_date(&self) -> Option<NaiveDate> {
        self.core
            .model
            .time_zone
            .utc_millis_to_local(self.core.model.viewport.view().start_millis)
            .map(|local| local.date())
    }

    #[must_use]
    pub fn timeline_ruler(&self) -> TimelineRuler {
        resolve_timeline_ruler(
            self.core.model.viewport.window().start_millis,
            self.core.config.normalization.entry_min_duration_millis,
            self.core.config.pixel_scale,
        )
    }

    fn scroll_to_current_program(
        &mut self,
        channel_id: Option<&str>,
        now_millis: i64,
    ) -> AutoScrollOutcome {
        let Some((entry_id, target_millis)) = self
            .current_program_at(channel_id, now_millis)
            .map(|entry| (entry.id, entry.start_millis))
        else {
            warn!(channel_id = ?channel_id, "cannot scroll to current program, schedule not found");
            return AutoScrollOutcome::NoCurrentProgram;
        };
        debug!(entry_id, target_millis, "scrolling to current program");
        if self.jump_to(target_millis) {
            AutoScrollOutcome::JumpedToCurrentProgram {
                entry_id,
                target_millis,
            }
        } else {
            AutoScrollOutcome::FocusCurrentProgram { entry_id }
        }
    }
}
