//! Compile-time client configuration.

/// Document title and brand text.
pub const APP_TITLE: &str = "Acme Portal";

/// `localStorage` key holding the serialized signed-in user.
pub const AUTH_STORAGE_KEY: &str = "acme-auth-user";

/// Auto-dismiss delay applied when `show` is called without a duration.
pub const DEFAULT_ALERT_DURATION_MS: i64 = 4000;

/// Property name of the `window` function that raises a toast.
pub const GLOBAL_ALERT_HOOK: &str = "showAlert";

/// Query parameter carrying the path a guest originally asked for.
pub const REDIRECT_QUERY_PARAM: &str = "redirect";
