//! `window.showAlert(message, type?, { duration? })` for code outside the
//! component tree (devtools, third-party scripts).
//!
//! The hook returns the new alert id, or `null` when the message is falsy.

#[cfg(test)]
#[path = "global_hook_test.rs"]
mod global_hook_test;

use crate::state::alerts::{AlertKind, AlertOptions};
#[cfg(feature = "csr")]
use crate::state::alerts::AlertStore;

/// Map the loosely-typed JS arguments onto store inputs.
pub fn hook_arguments(kind: Option<&str>, duration: Option<f64>) -> (AlertKind, AlertOptions) {
    let kind = kind.map_or(AlertKind::Info, AlertKind::from_name);
    // Saturating cast: NaN becomes 0 (sticky), infinities clamp to the i64 range.
    #[allow(clippy::cast_possible_truncation)]
    let duration_ms = duration.map(|ms| ms.trunc() as i64);
    (kind, AlertOptions { duration_ms })
}

/// Message text for a JS argument: falsy values yield `None`, other
/// non-strings are stringified.
#[cfg(feature = "csr")]
fn hook_message(value: &wasm_bindgen::JsValue) -> Option<String> {
    if !value.is_truthy() {
        return None;
    }
    value.as_string().or_else(|| js_sys::Object::from(value.clone()).to_string().as_string())
}

/// Install the hook on `window`, bound to `alerts`.
#[cfg(feature = "csr")]
pub fn install_show_alert(alerts: AlertStore) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::config::GLOBAL_ALERT_HOOK;

    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("no window; {GLOBAL_ALERT_HOOK} not installed");
        return;
    };

    let show = Closure::<dyn Fn(JsValue, JsValue, JsValue) -> JsValue>::new(
        move |message: JsValue, kind: JsValue, options: JsValue| {
            let Some(message) = hook_message(&message) else {
                return JsValue::NULL;
            };
            let duration = if options.is_object() {
                js_sys::Reflect::get(&options, &JsValue::from_str("duration"))
                    .ok()
                    .and_then(|v| v.as_f64())
            } else {
                None
            };
            let (kind, options) = hook_arguments(kind.as_string().as_deref(), duration);
            #[allow(clippy::cast_precision_loss)]
            let id = alerts.show(&message, kind, options).map(|id| id as f64);
            id.map_or(JsValue::NULL, JsValue::from_f64)
        },
    );

    if let Err(e) = js_sys::Reflect::set(window.as_ref(), &JsValue::from_str(GLOBAL_ALERT_HOOK), show.as_ref().unchecked_ref()) {
        leptos::logging::warn!("failed to install {GLOBAL_ALERT_HOOK}: {e:?}");
    }
    // The hook lives as long as the page.
    show.forget();
}
