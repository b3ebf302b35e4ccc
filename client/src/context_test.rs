use super::*;

use std::time::Duration;

use time::OffsetDateTime;

use crate::state::auth::Credentials;
use crate::util::clock::FixedClock;
use crate::util::scheduler::ManualScheduler;
use crate::util::storage::MemoryStorage;

fn test_context() -> (AppContext, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let clock = FixedClock(OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap());
    let ctx = AppContext::new(Rc::new(MemoryStorage::new()), Rc::new(scheduler.clone()), Rc::new(clock));
    (ctx, scheduler)
}

#[test]
fn notify_uses_default_duration() {
    let (ctx, scheduler) = test_context();
    assert_eq!(ctx.notify("Saved", AlertKind::Success), Some(1));
    scheduler.advance(Duration::from_millis(4000));
    assert!(ctx.alerts.alerts().is_empty());
}

#[test]
fn sign_out_logs_out_and_raises_info_alert() {
    let (ctx, _scheduler) = test_context();
    ctx.auth.login(&Credentials { name: None, email: "a@b.com".to_owned() }).unwrap();

    ctx.sign_out();

    assert!(!ctx.auth.is_authenticated());
    let alerts = ctx.alerts.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Info);
}

#[test]
fn clones_share_stores() {
    let (ctx, _scheduler) = test_context();
    let other = ctx.clone();
    ctx.auth.login(&Credentials { name: None, email: "a@b.com".to_owned() }).unwrap();
    other.notify("hi", AlertKind::Info);
    assert!(other.auth.is_authenticated());
    assert_eq!(ctx.alerts.alerts().len(), 1);
}

#[test]
fn signals_mirror_store_changes() {
    let owner = Owner::new();
    owner.with(|| {
        let (ctx, scheduler) = test_context();
        provide_app_context(ctx.clone());

        let auth = use_auth();
        let alerts = use_alerts();
        assert!(!auth.is_authenticated.get_untracked());

        ctx.auth.login(&Credentials { name: Some("Ann".to_owned()), email: "ann@acme.test".to_owned() }).unwrap();
        assert_eq!(auth.user.get_untracked().map(|u| u.name), Some("Ann".to_owned()));
        assert!(auth.is_authenticated.get_untracked());

        let id = ctx.notify("Saved", AlertKind::Success).unwrap();
        assert_eq!(alerts.alerts.get_untracked().len(), 1);

        alerts.dismiss.run(id);
        assert!(alerts.alerts.get_untracked().is_empty());
        assert_eq!(scheduler.cancelled(), 1);

        ctx.auth.logout();
        assert!(auth.user.get_untracked().is_none());
    });
}
