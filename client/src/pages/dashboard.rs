//! Dashboard page summarizing the signed-in session.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::{use_app, use_auth};
use crate::router::RouteName;
use crate::util::clock::parse_timestamp;

/// Human-readable login time, e.g. `November 14, 2023 at 22:13 UTC`.
/// Unparseable input is shown as stored.
pub(crate) fn format_login_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(at) => format!(
            "{} {}, {} at {:02}:{:02} UTC",
            at.month(),
            at.day(),
            at.year(),
            at.hour(),
            at.minute()
        ),
        None => raw.to_owned(),
    }
}

/// Dashboard page. Reached only through the auth guard, so a user is
/// normally present; the empty state covers a sign-out from another tab.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let app = use_app();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        app.with_value(|ctx| ctx.sign_out());
        navigate(RouteName::Home.path(), NavigateOptions::default());
    };

    view! {
        <section class="page page--dashboard">
            {move || match auth.user.get() {
                Some(user) => view! {
                    <header class="dashboard__header">
                        <h1>{format!("Hello, {}", user.name)}</h1>
                        <p class="dashboard__meta">{user.email}</p>
                        <p class="dashboard__meta">
                            {format!("Signed in {}", format_login_time(&user.logged_in_at))}
                        </p>
                    </header>
                }
                .into_any(),
                None => view! {
                    <p>"You are signed out."</p>
                }
                .into_any(),
            }}
            <div class="dashboard__cards">
                <A href=RouteName::Customers.path()>"Review customers"</A>
                <A href=RouteName::Contact.path()>"Contact support"</A>
            </div>
            <button class="btn" on:click=on_sign_out>
                "Sign out"
            </button>
        </section>
    }
}
