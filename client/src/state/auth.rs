//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The signed-in user lives in
//! memory and is mirrored to `localStorage` under [`AUTH_STORAGE_KEY`].
//!
//! ERROR HANDLING
//! ==============
//! Only validation failures reach callers. Storage failures are logged and
//! swallowed so an unavailable `localStorage` degrades to a signed-out session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::AUTH_STORAGE_KEY;
use crate::util::clock::{Clock, iso_timestamp};
use crate::util::observers::Observers;
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// The signed-in user. Serialized as `{ name, email, loggedInAt }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub logged_in_at: String,
}

/// Login form input. A missing or blank name falls back to the email local-part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A required credential field was empty.
    #[error("{field} is required")]
    Validation { field: &'static str },
}

#[derive(Default)]
struct AuthShared {
    user: RefCell<Option<User>>,
    observers: Observers<Option<User>>,
}

/// Holder of the single current user. Clones share state.
#[derive(Clone)]
pub struct AuthStore {
    shared: Rc<AuthShared>,
    storage: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
}

impl AuthStore {
    /// Build the store, restoring any user persisted by a previous session.
    pub fn load(storage: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>) -> Self {
        let user = read_stored_user(storage.as_ref());
        let shared = AuthShared { user: RefCell::new(user), observers: Observers::default() };
        Self { shared: Rc::new(shared), storage, clock }
    }

    /// Sign in, replacing any current user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` when the email is empty. State is left
    /// untouched in that case.
    pub fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        if credentials.email.is_empty() {
            return Err(AuthError::Validation { field: "email" });
        }

        let user = User {
            name: display_name(credentials.name.as_deref(), &credentials.email),
            email: credentials.email.clone(),
            logged_in_at: iso_timestamp(self.clock.now()),
        };
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    pub fn logout(&self) {
        self.set_user(None);
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.shared.user.borrow().is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.shared.user.borrow().clone()
    }

    /// Observe every change to the current user.
    pub fn subscribe(&self, observer: impl Fn(&Option<User>) + 'static) {
        self.shared.observers.subscribe(observer);
    }

    fn set_user(&self, user: Option<User>) {
        persist_user(self.storage.as_ref(), user.as_ref());
        *self.shared.user.borrow_mut() = user.clone();
        self.shared.observers.notify(&user);
    }
}

/// Trimmed `name`, or the part of `email` before the first `@` when the name
/// is missing or blank.
pub fn display_name(name: Option<&str>, email: &str) -> String {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_owned(),
        _ => email.split('@').next().unwrap_or_default().to_owned(),
    }
}

fn read_stored_user(storage: &dyn KeyValueStore) -> Option<User> {
    match load_json::<User>(storage, AUTH_STORAGE_KEY) {
        Ok(user) => user,
        Err(e) => {
            leptos::logging::warn!("failed to read stored user: {e}");
            None
        }
    }
}

fn persist_user(storage: &dyn KeyValueStore, user: Option<&User>) {
    let result = match user {
        Some(user) => save_json(storage, AUTH_STORAGE_KEY, user),
        None => storage.remove(AUTH_STORAGE_KEY),
    };
    if let Err(e) = result {
        leptos::logging::warn!("failed to persist user: {e}");
    }
}
