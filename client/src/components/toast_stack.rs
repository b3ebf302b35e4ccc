//! Toast stack rendering the live alert list, oldest on top.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::context::use_alerts;
use crate::state::alerts::{Alert, AlertKind};

/// CSS classes for a toast of `kind`.
pub fn toast_class(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "toast toast--info",
        AlertKind::Success => "toast toast--success",
        AlertKind::Warning => "toast toast--warning",
        AlertKind::Error => "toast toast--error",
    }
}

/// Fixed-position stack of alerts, each with a dismiss button.
#[component]
pub fn ToastStack() -> impl IntoView {
    let alerts = use_alerts();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || alerts.alerts.get()
                key=|alert| alert.id
                children=move |alert: Alert| {
                    let id = alert.id;
                    let role = if alert.kind == AlertKind::Error { "alert" } else { "status" };
                    view! {
                        <div class=toast_class(alert.kind) role=role>
                            <span class="toast__message">{alert.message}</span>
                            <button
                                class="toast__dismiss"
                                aria-label="Dismiss notification"
                                on:click=move |_| alerts.dismiss.run(id)
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
