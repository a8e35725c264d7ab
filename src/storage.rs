//! Synchronous string key-value storage seam.
//!
//! DESIGN
//! ======
//! Field persistence goes through [`KeyValueStore`] so the field layer stays
//! free of browser APIs. The browser build reads and writes `localStorage`;
//! native tests and server rendering use the in-memory store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Synchronous string-keyed storage, persisting across page loads when
/// backed by the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for native tests and non-browser builds.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `localStorage`-backed store. Requires a browser environment.
#[cfg(feature = "hydrate")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl BrowserStore {
    /// Open the window's local storage, or `None` outside a browser or when
    /// storage access is denied.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }
}

/// Open the durable browser store, falling back to a fresh in-memory store
/// when no browser storage is reachable.
pub fn open_store() -> Rc<dyn KeyValueStore> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(store) = BrowserStore::open() {
            return Rc::new(store);
        }
        log::warn!("localStorage unavailable; field values will not persist");
    }
    Rc::new(MemoryStore::new())
}
