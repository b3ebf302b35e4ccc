//! Login page: name + email sign-in for the local session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::REDIRECT_QUERY_PARAM;
use crate::context::use_app;
use crate::router::post_login_target;
use crate::state::alerts::AlertKind;
use crate::state::auth::{AuthError, Credentials, User};

/// Build store credentials from raw form input.
pub(crate) fn credentials_from_form(name: &str, email: &str) -> Credentials {
    let name = name.trim();
    Credentials {
        name: (!name.is_empty()).then(|| name.to_owned()),
        email: email.trim().to_owned(),
    }
}

pub(crate) fn welcome_message(user: &User) -> String {
    format!("Welcome back, {}!", user.name)
}

pub(crate) fn login_error_message(error: &AuthError) -> &'static str {
    match error {
        AuthError::Validation { field: "email" } => "Enter your email address to sign in.",
        AuthError::Validation { .. } => "Some required details are missing.",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let query = use_query_map();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = credentials_from_form(&name.get_untracked(), &email.get_untracked());

        let outcome = app.with_value(|ctx| match ctx.auth.login(&credentials) {
            Ok(user) => {
                ctx.notify(&welcome_message(&user), AlertKind::Success);
                true
            }
            Err(e) => {
                ctx.notify(login_error_message(&e), AlertKind::Error);
                false
            }
        });

        if outcome {
            let redirect = query.get_untracked().get(REDIRECT_QUERY_PARAM);
            navigate(&post_login_target(redirect.as_deref()), NavigateOptions::default());
        }
    };

    view! {
        <section class="page page--login">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Use your work email to open the dashboard."</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="field">
                        "Name"
                        <input
                            class="field__input"
                            type="text"
                            placeholder="Optional"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Email"
                        <input
                            class="field__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Sign in"
                    </button>
                </form>
            </div>
        </section>
    }
}
