use serde::{Deserialize, Serialize};

use crate::core::{EntryId, ScheduleEntry, TimeRange};

/// Inputs of a vertical focus move into a channel row.
///
/// `focus_range` is the time span the previously focused cell covered,
/// usually narrowed by earlier up/down moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusRequest {
    /// Entry the user selected last; wins whenever it is visible.
    pub last_selected: Option<EntryId>,
    pub focus_range: TimeRange,
    /// Prefer the program airing at `now_millis`.
    pub keep_current_program_focused: bool,
    pub now_millis: i64,
}

impl FocusRequest {
    #[must_use]
    pub fn new(focus_range: TimeRange, now_millis: i64) -> Self {
        Self {
            last_selected: None,
            focus_range,
            keep_current_program_focused: false,
            now_millis,
        }
    }

    #[must_use]
    pub fn with_last_selected(mut self, entry_id: EntryId) -> Self {
        self.last_selected = Some(entry_id);
        self
    }

    #[must_use]
    pub fn with_keep_current_program_focused(mut self, keep: bool) -> Self {
        self.keep_current_program_focused = keep;
        self
    }
}

/// Picks the entry of a row that should receive focus.
///
/// Only clickable entries visible in `view` are candidates; their extents are
/// clipped to the view. Priority: last selected entry, the airing program
/// when requested, the first candidate covering the whole focus range, the
/// widest candidate inside it, and finally the largest partial overlap.
pub(super) fn resolve_focus_index<T>(
    entries: &[ScheduleEntry<T>],
    view: TimeRange,
    request: &FocusRequest,
) -> Option<usize> {
    let candidates: Vec<(usize, &ScheduleEntry<T>, TimeRange)> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_clickable)
        .filter_map(|(index, entry)| {
            entry
                .time_range()
                .intersect(view)
                .map(|visible| (index, entry, visible))
        })
        .collect();

    if let Some(selected_id) = request.last_selected {
        if let Some((index, _, _)) = candidates.iter().find(|(_, entry, _)| entry.id == selected_id)
        {
            return Some(*index);
        }
    }

    if request.keep_current_program_focused {
        if let Some((index, _, _)) = candidates
            .iter()
            .find(|(_, entry, _)| entry.is_airing_at(request.now_millis))
        {
            return Some(*index);
        }
    }

    let focus = request.focus_range;
    if let Some((index, _, _)) = candidates.iter().find(|(_, _, visible)| {
        visible.start_millis <= focus.start_millis && focus.end_millis <= visible.end_millis
    }) {
        return Some(*index);
    }

    let mut widest_inside: Option<(usize, i64)> = None;
    let mut largest_overlap: Option<(usize, i64)> = None;
    for (index, _, visible) in &candidates {
        if focus.start_millis <= visible.start_millis && visible.end_millis <= focus.end_millis {
            let width = visible.span_millis();
            if widest_inside.is_none_or(|(_, best)| width > best) {
                widest_inside = Some((*index, width));
            }
        } else {
            // Disjoint candidates get a negative overlap: the closer one wins.
            let overlap = if focus.start_millis <= visible.start_millis {
                focus.end_millis.saturating_sub(visible.start_millis)
            } else {
                visible.end_millis.saturating_sub(focus.start_millis)
            };
            if largest_overlap.is_none_or(|(_, best)| overlap > best) {
                largest_overlap = Some((*index, overlap));
            }
        }
    }
    widest_inside.or(largest_overlap).map(|(index, _)| index)
}
