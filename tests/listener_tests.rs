use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, TimeZone, Utc};
use epg_rs::GuideError;
use epg_rs::api::{GuideEngine, GuideEngineConfig};
use epg_rs::core::{Channel, GuideTimeZone, ScheduleEntry};
use epg_rs::extensions::{GuideEvent, GuideListener, ListenerDisposition};
use indexmap::IndexMap;

#[derive(Clone)]
struct RecordingListener {
    id: String,
    events: Rc<RefCell<Vec<(String, GuideEvent)>>>,
    detach_after: Option<usize>,
    seen: usize,
}

impl RecordingListener {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(String, GuideEvent)>>>) -> Self {
        Self {
            id: id.into(),
            events,
            detach_after: None,
            seen: 0,
        }
    }

    fn detaching_after(mut self, count: usize) -> Self {
        self.detach_after = Some(count);
        self
    }
}

impl GuideListener for RecordingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: GuideEvent) -> ListenerDisposition {
        self.events.borrow_mut().push((self.id.clone(), event));
        self.seen += 1;
        match self.detach_after {
            Some(limit) if self.seen >= limit => ListenerDisposition::Detach,
            _ => ListenerDisposition::Keep,
        }
    }
}

fn engine() -> GuideEngine<u32> {
    GuideEngine::new(GuideEngineConfig::default()).expect("engine init")
}

fn load(engine: &mut GuideEngine<u32>) {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date");
    let now = Utc
        .with_ymd_and_hms(2024, 3, 10, 12, 0, 0)
        .single()
        .expect("valid now");
    let start = Utc
        .with_ymd_and_hms(2024, 3, 10, 10, 0, 0)
        .single()
        .expect("valid start");
    let end = Utc
        .with_ymd_and_hms(2024, 3, 10, 14, 0, 0)
        .single()
        .expect("valid end");
    let mut raw = IndexMap::new();
    raw.insert(
        "a".to_owned(),
        vec![ScheduleEntry::from_datetimes(1, "a", start, end, "Show", 7)],
    );
    engine.load_data_at(vec![Channel::new("a", "A")], raw, date, GuideTimeZone::Utc, now);
}

#[test]
fn register_rejects_empty_and_duplicate_ids() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));

    let err = engine
        .register_listener(Box::new(RecordingListener::new("", events.clone())))
        .expect_err("empty id must fail");
    assert!(matches!(err, GuideError::InvalidListener(_)));

    engine
        .register_listener(Box::new(RecordingListener::new("ui", events.clone())))
        .expect("register listener");
    let err = engine
        .register_listener(Box::new(RecordingListener::new("ui", events)))
        .expect_err("duplicate id must fail");
    assert!(format!("{err}").contains("already registered"));
    assert_eq!(engine.listener_count(), 1);
    assert!(engine.has_listener("ui"));
}

#[test]
fn unregister_reports_removal() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("ui", events)))
        .expect("register listener");

    assert!(engine.unregister_listener("ui"));
    assert!(!engine.unregister_listener("ui"));
    assert_eq!(engine.listener_count(), 0);
}

#[test]
fn load_fires_range_then_schedule_notifications() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("ui", events.clone())))
        .expect("register listener");

    load(&mut engine);
    assert_eq!(
        events.borrow().iter().map(|(_, event)| *event).collect::<Vec<_>>(),
        vec![GuideEvent::TimeRangeUpdated, GuideEvent::SchedulesUpdated]
    );

    events.borrow_mut().clear();
    load(&mut engine);
    assert_eq!(
        events.borrow().iter().map(|(_, event)| *event).collect::<Vec<_>>(),
        vec![GuideEvent::SchedulesUpdated]
    );
}

#[test]
fn unchanged_range_does_not_notify_twice() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("ui", events.clone())))
        .expect("register listener");

    assert!(engine.set_initial_range(1_000, 2_000));
    assert!(!engine.set_initial_range(1_000, 2_000));
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn update_entry_does_not_notify() {
    let mut engine = engine();
    load(&mut engine);
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("ui", events.clone())))
        .expect("register listener");

    let mut replacement = engine.entry_at("a", 0).expect("show").clone();
    replacement.payload = Some(8);
    engine.update_entry(replacement).expect("updated");
    assert!(events.borrow().is_empty());
}

#[test]
fn detaching_listener_still_lets_others_see_the_event() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(
            RecordingListener::new("once", events.clone()).detaching_after(1),
        ))
        .expect("register once");
    engine
        .register_listener(Box::new(RecordingListener::new("always", events.clone())))
        .expect("register always");

    engine.set_initial_range(0, 100);
    assert_eq!(engine.listener_count(), 1);
    assert!(!engine.has_listener("once"));
    assert_eq!(
        events.borrow().iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>(),
        vec!["once", "always"]
    );

    engine.shift_time(0);
    engine.set_initial_range(0, 200);
    assert_eq!(events.borrow().len(), 3);
    assert_eq!(events.borrow()[2].0, "always");
}
