//! Route table and the pre-navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` mounts one Leptos route per [`RouteName`] and runs [`before_each`]
//! when a route's view is resolved. The guard reads only the current
//! authentication flag, so its decision never waits on view code.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::config::REDIRECT_QUERY_PARAM;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Contact,
    Login,
    Dashboard,
    Customers,
}

/// Static access tags. A route is never both auth-required and guest-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub guest_only: bool,
}

impl RouteMeta {
    const OPEN: Self = Self { requires_auth: false, guest_only: false };
    const AUTH: Self = Self { requires_auth: true, guest_only: false };
    const GUEST: Self = Self { requires_auth: false, guest_only: true };
}

pub const ROUTES: [RouteName; 5] =
    [RouteName::Home, RouteName::Contact, RouteName::Login, RouteName::Dashboard, RouteName::Customers];

impl RouteName {
    /// Path segment mounted in the router (`""` for the root).
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Contact => "contact",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Customers => "customers",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Contact => "/contact",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Customers => "/customers",
        }
    }

    pub const fn meta(self) -> RouteMeta {
        match self {
            Self::Login => RouteMeta::GUEST,
            Self::Dashboard => RouteMeta::AUTH,
            Self::Home | Self::Contact | Self::Customers => RouteMeta::OPEN,
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Contact => "Contact",
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Customers => "Customers",
        }
    }

    /// Match a pathname, ignoring one trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        ROUTES.into_iter().find(|route| route.path() == trimmed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    /// Replace the navigation with this href.
    Redirect(String),
}

/// Decide whether a navigation to `target` (requested as `full_path`) may
/// proceed for a user whose signed-in state is `authenticated`.
pub fn before_each(target: RouteName, full_path: &str, authenticated: bool) -> NavigationDecision {
    let meta = target.meta();
    if meta.requires_auth && !authenticated {
        return NavigationDecision::Redirect(login_redirect_href(full_path));
    }
    if meta.guest_only && authenticated {
        return NavigationDecision::Redirect(RouteName::Dashboard.path().to_owned());
    }
    NavigationDecision::Proceed
}

/// Login href remembering `full_path` in the redirect query parameter.
pub fn login_redirect_href(full_path: &str) -> String {
    format!(
        "{}?{REDIRECT_QUERY_PARAM}={}",
        RouteName::Login.path(),
        urlencoding::encode(full_path)
    )
}

/// Join a pathname with a query string that may or may not carry its `?`.
pub fn full_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// Where to go after signing in: the remembered path when it stays on this
/// origin, the dashboard otherwise.
pub fn post_login_target(redirect: Option<&str>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => RouteName::Dashboard.path().to_owned(),
    }
}
