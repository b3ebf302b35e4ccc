//! Process-wide application context and its Leptos bindings.
//!
//! DESIGN
//! ======
//! `AppContext` is built once by the entry point and injected into `App`.
//! The stores inside it are plain single-threaded state holders; this module
//! subscribes to each store once and mirrors its snapshots into signals that
//! components read through `use_auth` and `use_alerts`. Mutations always go
//! through the stores (`use_app`), never through the mirrored signals.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::state::alerts::{Alert, AlertId, AlertKind, AlertOptions, AlertStore};
use crate::state::auth::{AuthStore, User};
use crate::util::clock::Clock;
use crate::util::scheduler::Scheduler;
use crate::util::storage::KeyValueStore;

/// Both client stores, shared by every view for the life of the page.
#[derive(Clone)]
pub struct AppContext {
    pub auth: AuthStore,
    pub alerts: AlertStore,
}

impl AppContext {
    pub fn new(storage: Rc<dyn KeyValueStore>, scheduler: Rc<dyn Scheduler>, clock: Rc<dyn Clock>) -> Self {
        Self { auth: AuthStore::load(storage, clock), alerts: AlertStore::new(scheduler) }
    }

    /// Context wired to `localStorage`, `setTimeout`, and the system clock.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        use crate::util::clock::SystemClock;
        use crate::util::scheduler::BrowserScheduler;
        use crate::util::storage::BrowserStorage;

        Self::new(Rc::new(BrowserStorage), Rc::new(BrowserScheduler), Rc::new(SystemClock))
    }

    /// Convenience for views: raise an alert with default options.
    pub fn notify(&self, message: &str, kind: AlertKind) -> Option<AlertId> {
        self.alerts.show(message, kind, AlertOptions::default())
    }

    /// Log out and tell the user so.
    pub fn sign_out(&self) {
        self.auth.logout();
        self.notify("You have been signed out.", AlertKind::Info);
    }
}

/// Arena handle to the context. `Copy`, so event handlers can capture it.
pub type AppHandle = StoredValue<AppContext, LocalStorage>;

/// Reactive read side of the auth store.
#[derive(Clone, Copy)]
pub struct AuthView {
    pub user: ReadSignal<Option<User>>,
    pub is_authenticated: Signal<bool>,
}

/// Reactive read side of the alert store plus its dismiss action.
#[derive(Clone, Copy)]
pub struct AlertsView {
    pub alerts: ReadSignal<Vec<Alert>>,
    pub dismiss: Callback<AlertId>,
}

/// Mirror both stores into signals and provide everything as context.
pub fn provide_app_context(ctx: AppContext) {
    let (user, set_user) = signal(ctx.auth.current_user());
    ctx.auth.subscribe(move |next| set_user.set(next.clone()));

    let (alerts, set_alerts) = signal(ctx.alerts.alerts());
    ctx.alerts.subscribe(move |list| set_alerts.set(list.to_vec()));

    let handle: AppHandle = StoredValue::new_local(ctx);
    let dismiss = Callback::new(move |id: AlertId| handle.with_value(|ctx| ctx.alerts.dismiss(id)));

    provide_context(handle);
    provide_context(AuthView { user, is_authenticated: Signal::derive(move || user.with(Option::is_some)) });
    provide_context(AlertsView { alerts, dismiss });
}

pub fn use_app() -> AppHandle {
    expect_context::<AppHandle>()
}

pub fn use_auth() -> AuthView {
    expect_context::<AuthView>()
}

pub fn use_alerts() -> AlertsView {
    expect_context::<AlertsView>()
}
