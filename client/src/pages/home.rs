//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_auth;
use crate::router::RouteName;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <section class="page page--home">
            <h1>"Customer operations, in one place."</h1>
            <p class="page__lead">
                "Track accounts, follow up on requests, and keep your whole team on the same page."
            </p>
            <div class="page__actions">
                <A href=RouteName::Customers.path()>"Browse customers"</A>
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=|| view! { <A href=RouteName::Login.path()>"Sign in to get started"</A> }
                >
                    <A href=RouteName::Dashboard.path()>"Open your dashboard"</A>
                </Show>
            </div>
        </section>
    }
}
