use chrono::{NaiveDate, TimeZone, Utc};
use epg_rs::api::{GuideEngine, GuideEngineConfig};
use epg_rs::core::{Channel, GAP_ENTRY_ID, GuideTimeZone, OriginalTimes, ScheduleEntry};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
struct Listing {
    recorded: bool,
}

fn at(h: u32, m: u32) -> i64 {
    Utc.with_ymd_and_hms(2024, 3, 10, h, m, 0)
        .single()
        .expect("valid instant")
        .timestamp_millis()
}

fn loaded_engine() -> GuideEngine<Listing> {
    let mut engine = GuideEngine::new(GuideEngineConfig::default()).expect("engine init");
    let listing = Listing { recorded: false };
    let mut raw = IndexMap::new();
    raw.insert(
        "a".to_owned(),
        vec![
            ScheduleEntry::program(1, "a", at(8, 0), at(9, 0), "Early", listing.clone()),
            ScheduleEntry::program(2, "a", at(9, 0), at(11, 0), "Late", listing.clone()),
        ],
    );
    raw.insert(
        "b".to_owned(),
        vec![
            ScheduleEntry::program(3, "b", at(8, 0), at(8, 1), "Teaser", listing.clone()),
            ScheduleEntry::program(2, "b", at(8, 1), at(10, 0), "Duplicate id", listing),
        ],
    );
    engine.load_data_at(
        vec![Channel::new("a", "A"), Channel::new("b", "B")],
        raw,
        NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date"),
        GuideTimeZone::Utc,
        Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0)
            .single()
            .expect("valid now"),
    );
    engine
}

#[test]
fn update_keeps_times_and_swaps_display_fields() {
    let mut engine = loaded_engine();
    let before = engine.entry_at("a", 0).expect("early").clone();

    let mut replacement = before.clone();
    replacement.display_title = Some("Early (recording)".to_owned());
    replacement.payload = Some(Listing { recorded: true });
    replacement.is_clickable = false;
    replacement.start_millis = 0;
    replacement.end_millis = 1;

    let updated = engine.update_entry(replacement).expect("entry updated");
    assert_eq!(updated.id, before.id);
    assert_eq!(updated.channel_id, before.channel_id);
    assert_eq!(updated.time_range(), before.time_range());
    assert_eq!(updated.original_times, before.original_times);
    assert_eq!(updated.display_title.as_deref(), Some("Early (recording)"));
    assert!(!updated.is_clickable);

    let stored = engine.entry_at("a", 0).expect("stored");
    assert_eq!(stored, &updated);
    assert_eq!(stored.payload, Some(Listing { recorded: true }));
}

#[test]
fn drifted_original_times_still_update_display_fields() {
    let mut engine = loaded_engine();
    let before = engine.entry_at("b", 0).expect("teaser").clone();
    assert_ne!(before.time_range().span_millis(), 60_000);

    let mut replacement = before.clone();
    replacement.original_times = OriginalTimes::new(at(12, 0), at(13, 0));
    replacement.display_title = Some("Teaser 2".to_owned());

    let updated = engine.update_entry(replacement).expect("entry updated");
    assert_eq!(updated.original_times, before.original_times);
    assert_eq!(updated.start_millis, before.start_millis);
    assert_eq!(updated.end_millis, before.end_millis);
    assert_eq!(updated.display_title.as_deref(), Some("Teaser 2"));
}

#[test]
fn first_match_in_channel_order_wins() {
    let mut engine = loaded_engine();
    let replacement = ScheduleEntry::program(2, "b", 0, 1, "Renamed", Listing { recorded: true });

    let updated = engine.update_entry(replacement).expect("entry updated");
    assert_eq!(updated.channel_id, "a");
    assert_eq!(
        engine.entry_at("a", 1).expect("late").display_title.as_deref(),
        Some("Renamed")
    );
    let duplicate = engine
        .channel_entries("b")
        .expect("channel b")
        .iter()
        .find(|entry| entry.id == 2)
        .expect("duplicate stays");
    assert_eq!(duplicate.display_title.as_deref(), Some("Duplicate id"));
}

#[test]
fn unknown_and_gap_ids_do_not_match() {
    let mut engine = loaded_engine();
    let unknown = ScheduleEntry::program(99, "a", 0, 1, "Nope", Listing { recorded: false });
    assert!(engine.update_entry(unknown).is_none());

    let gap = ScheduleEntry::gap("a", at(10, 0), at(11, 0));
    assert_eq!(gap.id, GAP_ENTRY_ID);
    assert!(engine.update_entry(gap).is_none());
}
