//! Key-value persistence over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores persist through the `KeyValueStore` seam so the browser binding
//! (`BrowserStorage`) can be swapped for `MemoryStorage` in native tests.
//! Every failure surfaces as a `StorageError`; callers decide whether to
//! recover, and the auth store always does.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failures reading or writing persisted client state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No `window` or `localStorage` (non-browser target, privacy mode).
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    /// The stored value was present but is not valid JSON for the target type.
    #[error("stored value for {key} is malformed: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("value for {key} could not be serialized: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal synchronous string store modelled on the Web Storage API.
pub trait KeyValueStore {
    /// Read the raw value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and deserialize a JSON value stored under `key`.
///
/// # Errors
///
/// Propagates read failures and reports malformed JSON as `StorageError::Parse`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Parse { key: key.to_owned(), source })
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Propagates serialization and write failures.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize { key: key.to_owned(), source })?;
    store.set(key, &raw)
}

/// `window.localStorage`. Every call reports `Unavailable` outside the
/// browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Read(describe_js(&e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(describe_js(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(describe_js(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(describe_js(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what the code under test persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
