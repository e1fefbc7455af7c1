//! Schedule normalization pipeline.
//!
//! Raw listings arrive sparse, overlapping or with open-ended sentinels. The
//! pipeline is total: every input yields a sorted, contiguous timeline per
//! channel whose entries all last at least `entry_min_duration_millis`.
//! Corrections are reported as `tracing` events, never as errors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::entry::ScheduleEntry;
use super::pixel_scale::MILLIS_PER_MINUTE;
use super::types::{Channel, TimeRange};

pub const DEFAULT_ENTRY_MIN_DURATION_MILLIS: i64 = 2 * MILLIS_PER_MINUTE;
pub const DEFAULT_MAX_UNACCOUNTED_GAP_MILLIS: i64 = 15 * MILLIS_PER_MINUTE;

/// Tuning of the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationRules {
    /// Shortest duration any normalized entry may have.
    pub entry_min_duration_millis: i64,
    /// Holes shorter than this are treated as listing noise and closed by
    /// stretching the previous entry instead of inserting a gap.
    pub max_unaccounted_gap_millis: i64,
}

impl Default for NormalizationRules {
    fn default() -> Self {
        Self {
            entry_min_duration_millis: DEFAULT_ENTRY_MIN_DURATION_MILLIS,
            max_unaccounted_gap_millis: DEFAULT_MAX_UNACCOUNTED_GAP_MILLIS,
        }
    }
}

/// Output of one normalization run.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSchedules<T> {
    /// Timeline every channel was cut and padded to.
    pub timeline: TimeRange,
    /// One normalized list per configured channel, in channel order.
    pub entries: IndexMap<String, Vec<ScheduleEntry<T>>>,
}

/// Normalizes all channels of a dataset against the policy window.
///
/// Raw lists keyed by ids that match no channel are dropped.
pub fn normalize_schedules<T>(
    channels: &[Channel],
    mut raw_entries: IndexMap<String, Vec<ScheduleEntry<T>>>,
    policy_window: TimeRange,
    rules: NormalizationRules,
) -> NormalizedSchedules<T> {
    let per_channel: Vec<(&str, Vec<ScheduleEntry<T>>)> = channels
        .iter()
        .map(|channel| {
            let mut list = raw_entries.swap_remove(&channel.id).unwrap_or_default();
            list.sort_by_key(|entry| entry.start_millis);
            (channel.id.as_str(), list)
        })
        .collect();

    for (channel_id, orphaned) in &raw_entries {
        warn!(
            channel_id = %channel_id,
            dropped = orphaned.len(),
            "dropping entries for unknown channel"
        );
    }

    let timeline = resolve_dataset_timeline(
        per_channel.iter().map(|(_, list)| list.as_slice()),
        policy_window,
    );
    debug!(
        channels = channels.len(),
        timeline_start = timeline.start_millis,
        timeline_end = timeline.end_millis,
        "normalizing schedules"
    );

    let entries = per_channel
        .into_iter()
        .map(|(channel_id, list)| {
            (
                channel_id.to_owned(),
                normalize_channel(channel_id, list, timeline, rules),
            )
        })
        .collect();

    NormalizedSchedules { timeline, entries }
}

/// Resolves the timeline shared by every channel of the dataset.
///
/// The data extent is the running min start / max end over all channels,
/// skipping open-ended sentinels. It is intersected with the policy window;
/// without data (or without overlap) the policy window is used as-is.
pub fn resolve_dataset_timeline<'a, T: 'a>(
    lists: impl IntoIterator<Item = &'a [ScheduleEntry<T>]>,
    policy_window: TimeRange,
) -> TimeRange {
    let (min_start, max_end) = lists.into_iter().flatten().fold(
        (None::<i64>, None::<i64>),
        |(min_start, max_end), entry| {
            let min_start = if entry.is_left_open() {
                min_start
            } else {
                Some(min_start.map_or(entry.start_millis, |v| v.min(entry.start_millis)))
            };
            let max_end = if entry.is_right_open() {
                max_end
            } else {
                Some(max_end.map_or(entry.end_millis, |v| v.max(entry.end_millis)))
            };
            (min_start, max_end)
        },
    );

    match (min_start, max_end) {
        (Some(start), Some(end)) => TimeRange::new(start, end)
            .intersect(policy_window)
            .unwrap_or(policy_window),
        _ => policy_window,
    }
}

/// Normalizes one channel against `timeline`.
///
/// Steps run in order: edge sentinels become gaps, entries are clipped to the
/// timeline, edges are padded, holes are closed, then minimum durations are
/// enforced.
pub fn normalize_channel<T>(
    channel_id: &str,
    mut raw: Vec<ScheduleEntry<T>>,
    timeline: TimeRange,
    rules: NormalizationRules,
) -> Vec<ScheduleEntry<T>> {
    raw.sort_by_key(|entry| entry.start_millis);
    let entries = if raw.is_empty() {
        trace!(channel_id, "channel without entries, filling with one gap");
        vec![ScheduleEntry::gap(
            channel_id,
            timeline.start_millis,
            timeline.end_millis,
        )]
    } else {
        let entries = replace_open_edges(raw);
        let entries = clip_to_timeline(channel_id, entries, timeline);
        if entries.is_empty() {
            debug!(channel_id, "no entry overlaps the timeline, filling with one gap");
            vec![ScheduleEntry::gap(
                channel_id,
                timeline.start_millis,
                timeline.end_millis,
            )]
        } else {
            let entries = pad_edges(channel_id, entries, timeline);
            close_unaccounted_gaps(channel_id, entries, rules.max_unaccounted_gap_millis)
        }
    };
    enforce_min_duration(entries, rules.entry_min_duration_millis)
}

/// A left-open first entry or right-open last entry is a placeholder, not a
/// program: it becomes a gap over the same raw interval.
fn replace_open_edges<T>(mut entries: Vec<ScheduleEntry<T>>) -> Vec<ScheduleEntry<T>> {
    if let Some(first) = entries.first_mut() {
        if first.is_left_open() && !first.is_gap() {
            debug!(entry_id = first.id, "replacing left-open entry with a gap");
            *first = first.to_gap();
        }
    }
    if let Some(last) = entries.last_mut() {
        if last.is_right_open() && !last.is_gap() {
            debug!(entry_id = last.id, "replacing right-open entry with a gap");
            *last = last.to_gap();
        }
    }
    entries
}

/// Drops entries outside `timeline` and trims the ones sticking out.
///
/// Inverted intervals collapse to zero length at their start.
pub(crate) fn clip_to_timeline<T>(
    channel_id: &str,
    entries: Vec<ScheduleEntry<T>>,
    timeline: TimeRange,
) -> Vec<ScheduleEntry<T>> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let end = entry.end_millis.max(entry.start_millis);
            if end <= timeline.start_millis || entry.start_millis >= timeline.end_millis {
                trace!(channel_id, entry_id = entry.id, "dropping entry outside timeline");
                return None;
            }
            let start = entry.start_millis.max(timeline.start_millis);
            let end = end.min(timeline.end_millis);
            if start == entry.start_millis && end == entry.end_millis {
                return Some(entry);
            }
            trace!(
                channel_id,
                entry_id = entry.id,
                start,
                end,
                "clipping entry to timeline"
            );
            Some(entry.with_times(start, end))
        })
        .collect()
}

pub(crate) fn pad_edges<T>(
    channel_id: &str,
    mut entries: Vec<ScheduleEntry<T>>,
    timeline: TimeRange,
) -> Vec<ScheduleEntry<T>> {
    if let Some(last_end) = entries.last().map(|entry| entry.end_millis) {
        if last_end < timeline.end_millis {
            entries.push(ScheduleEntry::gap(channel_id, last_end, timeline.end_millis));
        }
    }
    if let Some(first_start) = entries.first().map(|entry| entry.start_millis) {
        if timeline.start_millis < first_start {
            entries.insert(
                0,
                ScheduleEntry::gap(channel_id, timeline.start_millis, first_start),
            );
        }
    }
    entries
}

/// Makes consecutive entries touch.
///
/// Holes (or overlaps) shorter than `max_unaccounted_gap_millis` move the
/// earlier entry's end onto the next start; longer holes get an explicit gap.
pub(crate) fn close_unaccounted_gaps<T>(
    channel_id: &str,
    entries: Vec<ScheduleEntry<T>>,
    max_unaccounted_gap_millis: i64,
) -> Vec<ScheduleEntry<T>> {
    let mut closed = Vec::with_capacity(entries.len() + 1);
    let mut iter = entries.into_iter().peekable();
    while let Some(current) = iter.next() {
        let Some(next_start) = iter.peek().map(|next| next.start_millis) else {
            closed.push(current);
            break;
        };
        let hole = next_start.saturating_sub(current.end_millis);
        if hole == 0 {
            closed.push(current);
        } else if hole < max_unaccounted_gap_millis {
            let start = current.start_millis;
            closed.push(current.with_times(start, next_start));
        } else {
            let gap_start = current.end_millis;
            debug!(
                channel_id,
                gap_start,
                gap_end = next_start,
                "inserting gap for unaccounted time"
            );
            closed.push(current);
            closed.push(ScheduleEntry::gap(channel_id, gap_start, next_start));
        }
    }
    closed
}

/// Extends entries shorter than `min_duration_millis`.
///
/// Each extension becomes debt that pushes the next entry's start forward;
/// an entry long enough to absorb the debt only loses its head. The last
/// entry has nobody to pass debt to, so only its end moves.
pub fn enforce_min_duration<T>(
    entries: Vec<ScheduleEntry<T>>,
    min_duration_millis: i64,
) -> Vec<ScheduleEntry<T>> {
    let last_index = entries.len().saturating_sub(1);
    let capacity = entries.len();
    let (settled, _) = entries.into_iter().enumerate().fold(
        (Vec::with_capacity(capacity), 0_i64),
        |(mut settled, debt), (index, entry)| {
            let (entry, debt) =
                settle_min_duration(entry, debt, min_duration_millis, index == last_index);
            settled.push(entry);
            (settled, debt)
        },
    );
    settled
}

fn settle_min_duration<T>(
    entry: ScheduleEntry<T>,
    debt: i64,
    min_duration_millis: i64,
    is_last: bool,
) -> (ScheduleEntry<T>, i64) {
    let start = entry.start_millis.saturating_add(debt);
    let duration = entry.end_millis.saturating_sub(start);

    if is_last {
        if debt == 0 && duration >= min_duration_millis {
            return (entry, 0);
        }
        let end = entry
            .end_millis
            .max(start.saturating_add(min_duration_millis));
        debug!(entry_id = entry.id, start, end, "extending too short last entry");
        return (entry.with_times(start, end), 0);
    }

    if duration < min_duration_millis {
        let end = start.saturating_add(min_duration_millis);
        let next_debt = end.saturating_sub(entry.end_millis);
        debug!(
            entry_id = entry.id,
            start,
            end,
            debt = next_debt,
            "extending too short entry"
        );
        return (entry.with_times(start, end), next_debt);
    }

    if debt > 0 {
        let end = entry.end_millis;
        debug!(entry_id = entry.id, start, "shortening entry after previous extension");
        return (entry.with_times(start, end), 0);
    }

    (entry, 0)
}
