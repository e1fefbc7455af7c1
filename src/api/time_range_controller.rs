use tracing::trace;

use crate::core::{JumpOutcome, TimelineBounds};

use super::GuideEngine;

impl<T> GuideEngine<T> {
    /// Sets the range the guide opens on; its width becomes the view width.
    pub fn set_initial_range(&mut self, start_millis: i64, end_millis: i64) -> bool {
        let changed = self
            .core
            .model
            .viewport
            .set_initial_range(start_millis, end_millis);
        trace!(start_millis, end_millis, changed, "set initial range");
        if changed {
            self.emit_time_range_updated();
        }
        changed
    }

    /// Scrolls the visible range by `delta_millis`, clamped into the window.
    ///
    /// Returns `true` and notifies listeners only when the range moved.
    pub fn shift_time(&mut self, delta_millis: i64) -> bool {
        let changed = self.core.model.viewport.shift(delta_millis);
        trace!(delta_millis, changed, "shift time");
        if changed {
            self.emit_time_range_updated();
        }
        changed
    }

    /// Jumps the visible start to `target_start_millis`.
    ///
    /// Returns whether the requested shift was non-zero, which can be `true`
    /// at a window edge even though clamping kept the range in place. Use
    /// [`GuideEngine::jump_to_with_outcome`] to tell both apart.
    pub fn jump_to(&mut self, target_start_millis: i64) -> bool {
        self.jump_to_with_outcome(target_start_millis)
            .requested_shift
    }

    pub fn jump_to_with_outcome(&mut self, target_start_millis: i64) -> JumpOutcome {
        let outcome = self.core.model.viewport.jump_to(target_start_millis);
        trace!(
            target_start_millis,
            requested_shift = outcome.requested_shift,
            range_changed = outcome.range_changed,
            "jump to"
        );
        if outcome.range_changed {
            self.emit_time_range_updated();
        }
        outcome
    }

    /// Millis between the window start and the visible start.
    #[must_use]
    pub fn shifted_offset(&self) -> i64 {
        self.core.model.viewport.shifted_offset()
    }

    /// [`GuideEngine::shifted_offset`] converted with the configured pixel scale.
    #[must_use]
    pub fn shifted_offset_px(&self) -> i64 {
        self.core
            .config
            .pixel_scale
            .millis_to_pixels(self.shifted_offset())
    }

    #[must_use]
    pub fn current_bounds(&self) -> TimelineBounds {
        self.core.model.viewport.bounds()
    }
}
