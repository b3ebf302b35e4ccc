//! Fallback for paths outside the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::RouteName;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--not-found">
            <h1>"Page not found"</h1>
            <p>"The page you asked for does not exist."</p>
            <A href=RouteName::Home.path()>"Back to home"</A>
        </section>
    }
}
