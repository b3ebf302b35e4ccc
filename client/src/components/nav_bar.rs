//! Top navigation bar with route links and the session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::APP_TITLE;
use crate::context::{use_app, use_auth};
use crate::router::RouteName;

/// Routes linked from the bar, in display order. Login is reached through the
/// session controls instead.
const NAV_LINKS: [RouteName; 4] = [RouteName::Home, RouteName::Customers, RouteName::Dashboard, RouteName::Contact];

/// Navigation bar. Shows the signed-in user's name and a sign-out button,
/// or a sign-in link for guests.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let app = use_app();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        app.with_value(|ctx| ctx.sign_out());
        navigate(RouteName::Home.path(), NavigateOptions::default());
    };

    let user_name = move || auth.user.get().map(|u| u.name).unwrap_or_default();

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">
                <A href=RouteName::Home.path()>{APP_TITLE}</A>
            </span>
            <nav class="nav-bar__links">
                {NAV_LINKS
                    .into_iter()
                    .map(|route| view! { <A href=route.path()>{route.label()}</A> })
                    .collect_view()}
            </nav>
            <div class="nav-bar__session">
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=|| view! { <A href=RouteName::Login.path()>{RouteName::Login.label()}</A> }
                >
                    <span class="nav-bar__user">{user_name}</span>
                    <button class="btn" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
