//! Shared persisted-value state composed into each concrete field type.

use std::cell::RefCell;
use std::rc::Rc;

use crate::storage::KeyValueStore;

use super::{ChangeListener, FieldChange};

pub struct FieldCore {
    name: String,
    value: RefCell<String>,
    listeners: RefCell<Vec<ChangeListener>>,
    store: Rc<dyn KeyValueStore>,
}

impl FieldCore {
    /// Load the value stored under `name`, falling back to `default` when the
    /// key is absent or holds an empty string.
    pub fn load(name: &str, default: &str, store: Rc<dyn KeyValueStore>) -> Self {
        let value = store
            .get(name)
            .filter(|stored| !stored.is_empty())
            .unwrap_or_else(|| default.to_owned());
        Self {
            name: name.to_owned(),
            value: RefCell::new(value),
            listeners: RefCell::new(Vec::new()),
            store,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    /// Update the in-memory value and write through to the store. Listener
    /// notification is reserved for the user-interaction path ([`commit`]).
    ///
    /// [`commit`]: FieldCore::commit
    pub fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_owned();
        self.store.set(&self.name, value);
    }

    pub fn add_change_listener(&self, listener: ChangeListener) {
        self.listeners.borrow_mut().push(listener);
    }

    /// User-interaction path: persist `new`, then notify listeners in
    /// registration order with the old and new values.
    ///
    /// The listener list is cloned out before dispatch so a listener that
    /// writes to *another* field never re-borrows. A listener that commits to
    /// its own field recurses; nothing guards against that.
    pub fn commit(&self, new: &str) {
        let old = self.value();
        self.set_value(new);
        let change = FieldChange {
            field: self.name.clone(),
            old,
            new: new.to_owned(),
        };
        let listeners: Vec<ChangeListener> = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(&change);
        }
    }
}
