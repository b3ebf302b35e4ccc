use std::rc::Rc;
use std::time::Duration;

use super::*;
use crate::state::alerts::AlertStore;
use crate::util::scheduler::ManualScheduler;

#[test]
fn missing_arguments_use_info_and_default_duration() {
    assert_eq!(hook_arguments(None, None), (AlertKind::Info, AlertOptions::default()));
}

#[test]
fn known_kind_is_kept_and_unknown_falls_back() {
    assert_eq!(hook_arguments(Some("error"), None).0, AlertKind::Error);
    assert_eq!(hook_arguments(Some("panic"), None).0, AlertKind::Info);
}

#[test]
fn fractional_duration_is_truncated() {
    assert_eq!(hook_arguments(None, Some(1500.9)).1, AlertOptions::duration(1500));
}

#[test]
fn negative_duration_is_preserved_as_sticky() {
    assert_eq!(hook_arguments(None, Some(-1.0)).1, AlertOptions::duration(-1));
}

#[test]
fn nan_duration_is_sticky() {
    assert_eq!(hook_arguments(None, Some(f64::NAN)).1, AlertOptions::sticky());
}

#[test]
fn infinite_durations_saturate() {
    assert_eq!(hook_arguments(None, Some(f64::NEG_INFINITY)).1, AlertOptions::duration(i64::MIN));
    assert_eq!(hook_arguments(None, Some(f64::INFINITY)).1, AlertOptions::duration(i64::MAX));
}

#[test]
fn nan_duration_keeps_alert_until_dismissed() {
    let scheduler = ManualScheduler::new();
    let alerts = AlertStore::new(Rc::new(scheduler.clone()));
    let (kind, options) = hook_arguments(Some("warning"), Some(f64::NAN));

    let id = alerts.show("disk almost full", kind, options).unwrap();
    scheduler.advance(Duration::from_secs(3600));

    assert_eq!(scheduler.pending(), 0);
    assert_eq!(alerts.alerts().iter().map(|a| a.id).collect::<Vec<_>>(), vec![id]);
}
