//! Contact page with a message form acknowledged by a toast.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::context::use_app;
use crate::state::alerts::AlertKind;

/// Trimmed message body, or the warning to show when it is blank.
pub(crate) fn validate_message(message: &str) -> Result<String, &'static str> {
    let message = message.trim();
    if message.is_empty() { Err("Please write a message before sending.") } else { Ok(message.to_owned()) }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let app = use_app();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_message(&message.get_untracked()) {
            Ok(_) => {
                app.with_value(|ctx| ctx.notify("Thanks! We'll get back to you shortly.", AlertKind::Success));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(warning) => {
                app.with_value(|ctx| ctx.notify(warning, AlertKind::Warning));
            }
        }
    };

    view! {
        <section class="page page--contact">
            <h1>"Contact us"</h1>
            <p class="page__lead">"Questions about your account? Send us a note."</p>
            <form class="contact-form" on:submit=on_submit>
                <label class="field">
                    "Name"
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Email"
                    <input
                        class="field__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Message"
                    <textarea
                        class="field__input field__input--multiline"
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit">
                    "Send message"
                </button>
            </form>
        </section>
    }
}
