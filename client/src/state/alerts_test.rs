use super::*;

use crate::util::scheduler::ManualScheduler;

fn store() -> (AlertStore, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    (AlertStore::new(Rc::new(scheduler.clone())), scheduler)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================
// AlertKind
// =============================================================

#[test]
fn alert_kind_parses_known_names() {
    assert_eq!(AlertKind::from_name("info"), AlertKind::Info);
    assert_eq!(AlertKind::from_name("success"), AlertKind::Success);
    assert_eq!(AlertKind::from_name("warning"), AlertKind::Warning);
    assert_eq!(AlertKind::from_name("error"), AlertKind::Error);
}

#[test]
fn alert_kind_unknown_name_falls_back_to_info() {
    assert_eq!(AlertKind::from_name("fatal"), AlertKind::Info);
    assert_eq!(AlertKind::from_name("SUCCESS"), AlertKind::Info);
    assert_eq!(AlertKind::from_name(""), AlertKind::Info);
}

#[test]
fn alert_serializes_kind_as_type() {
    let alert = Alert { id: 1, message: "Saved".to_owned(), kind: AlertKind::Success };
    assert_eq!(
        serde_json::to_value(&alert).unwrap(),
        serde_json::json!({ "id": 1, "message": "Saved", "type": "success" })
    );
}

// =============================================================
// show
// =============================================================

#[test]
fn saved_alert_lives_for_default_duration() {
    let (alerts, scheduler) = store();

    let id = alerts.show("Saved", AlertKind::Success, AlertOptions::default());

    assert_eq!(id, Some(1));
    assert_eq!(
        alerts.alerts(),
        vec![Alert { id: 1, message: "Saved".to_owned(), kind: AlertKind::Success }]
    );

    scheduler.advance(ms(3999));
    assert_eq!(alerts.alerts().len(), 1);

    scheduler.advance(ms(1));
    assert!(alerts.alerts().is_empty());
}

#[test]
fn empty_message_is_ignored_and_consumes_no_id() {
    let (alerts, scheduler) = store();
    assert_eq!(alerts.show("", AlertKind::Error, AlertOptions::default()), None);
    assert!(alerts.alerts().is_empty());
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(alerts.show("next", AlertKind::Info, AlertOptions::default()), Some(1));
}

#[test]
fn ids_strictly_increase_across_removals() {
    let (alerts, scheduler) = store();
    let mut last = 0;
    for round in 0..5 {
        let id = alerts.show(&format!("round {round}"), AlertKind::Info, AlertOptions::duration(10)).unwrap();
        assert!(id > last);
        last = id;
        if round % 2 == 0 {
            alerts.dismiss(id);
        } else {
            scheduler.advance(ms(10));
        }
    }
    assert!(alerts.alerts().is_empty());
    assert_eq!(last, 5);
}

#[test]
fn alerts_are_listed_oldest_first() {
    let (alerts, _scheduler) = store();
    alerts.show("one", AlertKind::Info, AlertOptions::default());
    alerts.show("two", AlertKind::Warning, AlertOptions::default());
    alerts.show("three", AlertKind::Error, AlertOptions::default());
    let messages: Vec<String> = alerts.alerts().into_iter().map(|a| a.message).collect();
    assert_eq!(messages, vec!["one", "two", "three"]);
}

#[test]
fn custom_duration_controls_expiry() {
    let (alerts, scheduler) = store();
    alerts.show("quick", AlertKind::Info, AlertOptions::duration(250));
    alerts.show("slow", AlertKind::Info, AlertOptions::duration(1000));

    scheduler.advance(ms(250));
    let remaining: Vec<String> = alerts.alerts().into_iter().map(|a| a.message).collect();
    assert_eq!(remaining, vec!["slow"]);

    scheduler.advance(ms(750));
    assert!(alerts.alerts().is_empty());
}

#[test]
fn non_positive_duration_never_expires() {
    let (alerts, scheduler) = store();
    alerts.show("sticky", AlertKind::Warning, AlertOptions::sticky());
    alerts.show("negative", AlertKind::Warning, AlertOptions::duration(-5));

    assert_eq!(scheduler.pending(), 0);
    scheduler.advance(Duration::from_secs(3600));
    assert_eq!(alerts.alerts().len(), 2);
}

// =============================================================
// dismiss
// =============================================================

#[test]
fn dismiss_removes_alert_and_cancels_timer() {
    let (alerts, scheduler) = store();
    let id = alerts.show("bye", AlertKind::Info, AlertOptions::default()).unwrap();

    alerts.dismiss(id);

    assert!(alerts.alerts().is_empty());
    assert_eq!(scheduler.cancelled(), 1);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let (alerts, scheduler) = store();
    alerts.show("keep", AlertKind::Info, AlertOptions::default());
    alerts.dismiss(42);
    assert_eq!(alerts.alerts().len(), 1);
    assert_eq!(scheduler.cancelled(), 0);
}

#[test]
fn dismiss_twice_is_noop() {
    let (alerts, scheduler) = store();
    let id = alerts.show("once", AlertKind::Info, AlertOptions::default()).unwrap();
    alerts.dismiss(id);
    alerts.dismiss(id);
    assert_eq!(scheduler.cancelled(), 1);
}

#[test]
fn dismiss_after_expiry_is_noop() {
    let (alerts, scheduler) = store();
    let id = alerts.show("gone", AlertKind::Info, AlertOptions::duration(10)).unwrap();
    scheduler.advance(ms(10));
    alerts.dismiss(id);
    assert!(alerts.alerts().is_empty());
    assert_eq!(scheduler.cancelled(), 0);
}

#[test]
fn dismiss_sticky_alert_removes_it() {
    let (alerts, _scheduler) = store();
    let id = alerts.show("sticky", AlertKind::Info, AlertOptions::sticky()).unwrap();
    alerts.dismiss(id);
    assert!(alerts.alerts().is_empty());
}

#[test]
fn dismiss_leaves_other_timers_running() {
    let (alerts, scheduler) = store();
    let first = alerts.show("first", AlertKind::Info, AlertOptions::default()).unwrap();
    alerts.show("second", AlertKind::Info, AlertOptions::default());
    alerts.dismiss(first);
    assert_eq!(scheduler.pending(), 1);
    scheduler.advance(ms(4000));
    assert!(alerts.alerts().is_empty());
}

// =============================================================
// subscriptions
// =============================================================

#[test]
fn subscribers_receive_each_snapshot() {
    let (alerts, scheduler) = store();
    let sizes = Rc::new(RefCell::new(Vec::new()));
    let log = sizes.clone();
    alerts.subscribe(move |list| log.borrow_mut().push(list.len()));

    let id = alerts.show("a", AlertKind::Info, AlertOptions::duration(100)).unwrap();
    alerts.show("b", AlertKind::Info, AlertOptions::duration(100));
    alerts.dismiss(id);
    scheduler.advance(ms(100));

    assert_eq!(*sizes.borrow(), vec![1, 2, 1, 0]);
}

#[test]
fn noop_operations_do_not_notify() {
    let (alerts, _scheduler) = store();
    let calls = Rc::new(RefCell::new(0));
    let count = calls.clone();
    alerts.subscribe(move |_| *count.borrow_mut() += 1);

    alerts.show("", AlertKind::Info, AlertOptions::default());
    alerts.dismiss(7);

    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn timer_outliving_store_is_harmless() {
    let (alerts, scheduler) = store();
    alerts.show("orphan", AlertKind::Info, AlertOptions::default());
    drop(alerts);
    scheduler.advance(ms(4000));
    assert_eq!(scheduler.pending(), 0);
}
