//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Alerts are kept in insertion order, oldest first. Each alert that expires
//! owns the `ScheduledTask` for its removal; whichever of expiry or
//! `dismiss` comes first removes the alert and the other becomes a no-op.
//! Ids come from a counter that only moves forward, so an id is never
//! reused while the store lives.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_ALERT_DURATION_MS;
use crate::util::observers::Observers;
use crate::util::scheduler::{ScheduledTask, Scheduler};

pub type AlertId = u64;

/// Visual severity of an alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    /// Parse a kind name; anything unrecognized is `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Render-facing view of an alert. The removal timer stays inside the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: AlertId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlertOptions {
    /// Milliseconds before auto-dismiss. `None` means the default; zero or
    /// negative keeps the alert until dismissed.
    pub duration_ms: Option<i64>,
}

impl AlertOptions {
    pub fn duration(ms: i64) -> Self {
        Self { duration_ms: Some(ms) }
    }

    /// Stay on screen until dismissed.
    pub fn sticky() -> Self {
        Self::duration(0)
    }

    fn expiry(self) -> Option<Duration> {
        let ms = self.duration_ms.unwrap_or(DEFAULT_ALERT_DURATION_MS);
        u64::try_from(ms).ok().filter(|ms| *ms > 0).map(Duration::from_millis)
    }
}

struct Entry {
    alert: Alert,
    timer: Option<Box<dyn ScheduledTask>>,
}

#[derive(Default)]
struct AlertShared {
    last_id: RefCell<AlertId>,
    entries: RefCell<Vec<Entry>>,
    observers: Observers<[Alert]>,
}

impl AlertShared {
    fn snapshot(&self) -> Vec<Alert> {
        self.entries.borrow().iter().map(|e| e.alert.clone()).collect()
    }

    fn remove(&self, id: AlertId) {
        let removed = {
            let mut entries = self.entries.borrow_mut();
            entries.iter().position(|e| e.alert.id == id).map(|idx| entries.remove(idx))
        };
        let Some(entry) = removed else {
            return;
        };
        if let Some(timer) = entry.timer {
            timer.cancel();
        }
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        self.observers.notify(&snapshot);
    }
}

/// Ordered alert list with auto-dismiss timers. Clones share state.
#[derive(Clone)]
pub struct AlertStore {
    shared: Rc<AlertShared>,
    scheduler: Rc<dyn Scheduler>,
}

impl AlertStore {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self { shared: Rc::new(AlertShared::default()), scheduler }
    }

    /// Append an alert and schedule its removal.
    ///
    /// Returns `None` without consuming an id when `message` is empty.
    pub fn show(&self, message: &str, kind: AlertKind, options: AlertOptions) -> Option<AlertId> {
        if message.is_empty() {
            return None;
        }

        let id = {
            let mut last_id = self.shared.last_id.borrow_mut();
            *last_id += 1;
            *last_id
        };

        let timer = options.expiry().map(|delay| {
            let shared: Weak<AlertShared> = Rc::downgrade(&self.shared);
            self.scheduler.schedule(
                delay,
                Box::new(move || {
                    if let Some(shared) = shared.upgrade() {
                        shared.remove(id);
                    }
                }),
            )
        });

        let alert = Alert { id, message: message.to_owned(), kind };
        self.shared.entries.borrow_mut().push(Entry { alert, timer });
        self.shared.notify();
        Some(id)
    }

    /// Remove the alert with `id` and cancel its timer. Unknown ids are ignored.
    pub fn dismiss(&self, id: AlertId) {
        self.shared.remove(id);
    }

    /// Current alerts, oldest first.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.shared.snapshot()
    }

    /// Observe every change to the alert list.
    pub fn subscribe(&self, observer: impl Fn(&[Alert]) + 'static) {
        self.shared.observers.subscribe(observer);
    }
}
