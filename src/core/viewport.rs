use serde::{Deserialize, Serialize};

use super::types::{TimeRange, TimelineBounds};

/// Result of a jump request.
///
/// `requested_shift` reports whether the target differed from the current
/// view start; `range_changed` whether the clamped view actually moved. Both
/// can disagree at window edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpOutcome {
    pub requested_shift: bool,
    pub range_changed: bool,
}

/// Sliding visible range over the guide window.
///
/// `window_*` are the outer bounds of the loaded data; `view_*` the visible
/// sub-range whose width is fixed by `set_initial_range`. Every mutator
/// returns `true` only when the visible range actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineViewport {
    window_start: i64,
    window_end: i64,
    view_start: i64,
    view_end: i64,
}

impl TimelineViewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bounds(self) -> TimelineBounds {
        TimelineBounds {
            window_start: self.window_start,
            window_end: self.window_end,
            view_start: self.view_start,
            view_end: self.view_end,
        }
    }

    #[must_use]
    pub fn window(self) -> TimeRange {
        TimeRange::new(self.window_start, self.window_end)
    }

    #[must_use]
    pub fn view(self) -> TimeRange {
        TimeRange::new(self.view_start, self.view_end)
    }

    #[must_use]
    pub fn view_width(self) -> i64 {
        self.view().span_millis()
    }

    /// Offset of the visible start from the window start.
    #[must_use]
    pub fn shifted_offset(self) -> i64 {
        self.view_start.saturating_sub(self.window_start)
    }

    /// Sets the range the guide opens on.
    ///
    /// The window start moves to `start`; the window end only grows.
    pub fn set_initial_range(&mut self, start: i64, end: i64) -> bool {
        self.window_start = start;
        if end > self.window_end {
            self.window_end = end;
        }
        self.set_range(start, end)
    }

    /// Moves the visible range by `delta_millis`, clamped into the window.
    ///
    /// The view width never changes, whatever the delta.
    pub fn shift(&mut self, delta_millis: i64) -> bool {
        let target = i128::from(self.view_start) + i128::from(delta_millis);
        self.move_view_start(target)
    }

    pub fn jump_to(&mut self, target_start: i64) -> JumpOutcome {
        let requested_shift = target_start != self.view_start;
        let range_changed = self.move_view_start(i128::from(target_start));
        JumpOutcome {
            requested_shift,
            range_changed,
        }
    }

    /// Installs the window of a fresh dataset.
    ///
    /// The view keeps its width and is re-anchored at the new window start.
    pub fn replace_window(&mut self, window: TimeRange) -> bool {
        let width = self.view_width().max(0);
        self.window_start = window.start_millis;
        self.window_end = window.end_millis;
        let (start, end) = self.place_view(i128::from(window.start_millis), width);
        self.set_range(start, end)
    }

    pub(crate) fn set_range(&mut self, start: i64, end: i64) -> bool {
        if self.view_start == start && self.view_end == end {
            return false;
        }
        self.view_start = start;
        self.view_end = end;
        true
    }

    fn move_view_start(&mut self, target_start: i128) -> bool {
        let (start, end) = self.place_view(target_start, self.view_width().max(0));
        self.set_range(start, end)
    }

    /// Clamps a view start into `[window_start, window_end - width]` and
    /// derives the end from the width. Math runs in `i128` so no `i64`
    /// target or window can overflow.
    fn place_view(self, target_start: i128, width: i64) -> (i64, i64) {
        let earliest = i128::from(self.window_start);
        let latest = i128::from(self.window_end) - i128::from(width);
        // A view wider than the window stays pinned to the window start.
        let start = if latest < earliest {
            earliest
        } else {
            target_start.clamp(earliest, latest)
        };
        let start = i64::try_from(start).unwrap_or(self.window_start);
        (start, start.saturating_add(width))
    }
}
