//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::{nav_bar::NavBar, toast_stack::ToastStack};
use crate::config::APP_TITLE;
use crate::context::{AppContext, provide_app_context, use_auth};
use crate::pages::{
    contact::ContactPage, customers::CustomersPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage,
};
use crate::router::{NavigationDecision, RouteName, before_each, full_path};
use crate::util::scroll::scroll_to_top;

/// Root application component.
///
/// Provides the store context for all child components and sets up
/// client-side routing with the auth guard in front of every route.
#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    provide_meta_context();
    provide_app_context(ctx);

    view! {
        <Title text=APP_TITLE/>

        <Router>
            <ScrollToTop/>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment(RouteName::Home.segment()) view=|| view! { <Guarded route=RouteName::Home/> }/>
                    <Route path=StaticSegment(RouteName::Contact.segment()) view=|| view! { <Guarded route=RouteName::Contact/> }/>
                    <Route path=StaticSegment(RouteName::Login.segment()) view=|| view! { <Guarded route=RouteName::Login/> }/>
                    <Route path=StaticSegment(RouteName::Dashboard.segment()) view=|| view! { <Guarded route=RouteName::Dashboard/> }/>
                    <Route path=StaticSegment(RouteName::Customers.segment()) view=|| view! { <Guarded route=RouteName::Customers/> }/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}

/// Run the navigation guard for `route`, then render its page or redirect.
///
/// Runs when the matched route is built, so the URL has already changed; a
/// redirect replaces the page before it renders. The auth flag is read
/// untracked: the decision belongs to the navigation, and later sign-in
/// changes do not re-run it.
#[component]
fn Guarded(route: RouteName) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let requested = full_path(&location.pathname.get_untracked(), &location.search.get_untracked());

    match before_each(route, &requested, auth.is_authenticated.get_untracked()) {
        NavigationDecision::Proceed => route_view(route),
        NavigationDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

fn route_view(route: RouteName) -> AnyView {
    match route {
        RouteName::Home => view! { <HomePage/> }.into_any(),
        RouteName::Contact => view! { <ContactPage/> }.into_any(),
        RouteName::Login => view! { <LoginPage/> }.into_any(),
        RouteName::Dashboard => view! { <DashboardPage/> }.into_any(),
        RouteName::Customers => view! { <CustomersPage/> }.into_any(),
    }
}

/// Reset the scroll position after every completed navigation.
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        location.pathname.track();
        location.search.track();
        scroll_to_top();
    });
}
