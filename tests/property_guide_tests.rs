use epg_rs::api::{GuideEngine, GuideEngineConfig};
use epg_rs::core::{
    NormalizationRules, ScheduleEntry, TimeRange, TimelineViewport, enforce_min_duration,
    normalize_channel,
};
use proptest::prelude::*;

const T0: i64 = 1_710_000_000_000;

fn raw_entries() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0_i64..20_000, -500_i64..3_000), 0..24)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(start, length)| (T0 + start, T0 + start + length))
                .collect()
        })
}

fn to_entries(pairs: &[(i64, i64)]) -> Vec<ScheduleEntry<u32>> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, (start, end))| {
            let id = i64::try_from(index).expect("small index");
            ScheduleEntry::program(id, "ch", *start, *end, "p", 0)
        })
        .collect()
}

proptest! {
    #[test]
    fn normalized_timeline_is_sorted_contiguous_and_long_enough(
        pairs in raw_entries(),
        timeline_start in 0_i64..10_000,
        timeline_len in 1_i64..20_000,
        min_duration in 1_i64..600,
        max_gap in 0_i64..2_000
    ) {
        let timeline = TimeRange::new(T0 + timeline_start, T0 + timeline_start + timeline_len);
        let rules = NormalizationRules {
            entry_min_duration_millis: min_duration,
            max_unaccounted_gap_millis: max_gap,
        };
        let normalized = normalize_channel("ch", to_entries(&pairs), timeline, rules);

        prop_assert!(!normalized.is_empty());
        prop_assert_eq!(normalized[0].start_millis, timeline.start_millis);
        let tail = normalized.last().expect("non-empty");
        prop_assert!(tail.end_millis >= timeline.end_millis);
        for pair in normalized.windows(2) {
            prop_assert!(pair[0].start_millis <= pair[1].start_millis);
            prop_assert_eq!(pair[0].end_millis, pair[1].start_millis);
        }
        for entry in &normalized {
            prop_assert!(entry.duration_millis() >= min_duration);
            prop_assert_eq!(entry.channel_id.as_str(), "ch");
        }
    }

    #[test]
    fn min_duration_fold_preserves_count_and_contiguity(
        lengths in prop::collection::vec(1_i64..400, 1..30),
        min_duration in 1_i64..300
    ) {
        let mut start = T0;
        let entries: Vec<ScheduleEntry<u32>> = lengths
            .iter()
            .enumerate()
            .map(|(index, length)| {
                let entry = ScheduleEntry::program(
                    i64::try_from(index).expect("small index"),
                    "ch",
                    start,
                    start + length,
                    "p",
                    0,
                );
                start += length;
                entry
            })
            .collect();

        let settled = enforce_min_duration(entries, min_duration);
        prop_assert_eq!(settled.len(), lengths.len());
        prop_assert_eq!(settled[0].start_millis, T0);
        for pair in settled.windows(2) {
            prop_assert_eq!(pair[0].end_millis, pair[1].start_millis);
        }
        for entry in &settled {
            prop_assert!(entry.duration_millis() >= min_duration);
        }
    }

    #[test]
    fn viewport_stays_inside_window_with_fixed_width(
        window_len in 1_000_i64..100_000,
        view_len in 1_i64..1_000,
        shifts in prop::collection::vec(any::<i64>(), 1..40)
    ) {
        let mut viewport = TimelineViewport::new();
        viewport.set_initial_range(0, window_len);
        viewport.set_initial_range(0, view_len);

        for delta in shifts {
            viewport.shift(delta);
            let bounds = viewport.bounds();
            prop_assert!(bounds.view_start >= bounds.window_start);
            prop_assert!(bounds.view_end <= bounds.window_end);
            prop_assert_eq!(bounds.view_width(), view_len);
        }
    }

    #[test]
    fn jump_never_leaves_the_window(
        window_len in 1_000_i64..100_000,
        view_len in 1_i64..1_000,
        target in -200_000_i64..200_000
    ) {
        let mut engine = GuideEngine::<()>::new(GuideEngineConfig::default()).expect("engine init");
        engine.set_initial_range(0, window_len);
        engine.set_initial_range(0, view_len);

        let requested = engine.jump_to(target);
        let bounds = engine.current_bounds();
        prop_assert_eq!(requested, target != 0);
        prop_assert!(bounds.view_start >= 0);
        prop_assert!(bounds.view_end <= window_len);
        prop_assert_eq!(bounds.view_width(), view_len);
    }

    #[test]
    fn update_entry_never_moves_an_entry(
        pairs in raw_entries(),
        pick in 0_usize..24,
        new_start in 0_i64..1_000,
        new_end in 0_i64..1_000,
        clickable in any::<bool>()
    ) {
        let mut engine = GuideEngine::new(GuideEngineConfig::default()).expect("engine init");
        let mut raw = indexmap::IndexMap::new();
        raw.insert("ch".to_owned(), to_entries(&pairs));
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        engine.load_data_at(
            vec![epg_rs::core::Channel::new("ch", "Channel")],
            raw,
            date,
            epg_rs::core::GuideTimeZone::Utc,
            chrono::DateTime::from_timestamp_millis(T0).expect("valid now"),
        );

        let programs: Vec<ScheduleEntry<u32>> = engine
            .channel_entries("ch")
            .expect("channel")
            .iter()
            .filter(|entry| !entry.is_gap())
            .cloned()
            .collect();
        prop_assume!(!programs.is_empty());
        let before = programs[pick % programs.len()].clone();

        let mut replacement = before.clone();
        replacement.start_millis = new_start;
        replacement.end_millis = new_end;
        replacement.channel_id = "elsewhere".to_owned();
        replacement.is_clickable = clickable;
        replacement.payload = Some(42);

        let updated = engine.update_entry(replacement).expect("existing id");
        prop_assert_eq!(updated.id, before.id);
        prop_assert_eq!(updated.channel_id, before.channel_id);
        prop_assert_eq!(updated.start_millis, before.start_millis);
        prop_assert_eq!(updated.end_millis, before.end_millis);
        prop_assert_eq!(updated.is_clickable, clickable);
    }
}
