//! Persisted form fields with synchronous change notification.
//!
//! DESIGN
//! ======
//! Every field pairs a durable value with an on-screen control and an ordered
//! listener list. Instead of an inheritance chain there is one [`FormField`]
//! contract with two independent concrete types: [`TextField`] for a single
//! free-text control and [`ChoiceField`] for a mutually-exclusive group.
//! Both compose the shared [`FieldCore`] rather than extending it.
//!
//! Listeners fire only on the user-interaction path (`commit_*`); programmatic
//! `set_value` writes through to storage and the control without notifying,
//! which is what lets a derived field be written from a listener without
//! echoing.

pub mod bind;
pub mod choice;
pub mod core;
pub mod text;

#[cfg(test)]
pub(crate) mod stubs;

pub use self::bind::bind;
pub use self::choice::{ChoiceControl, ChoiceField};
pub use self::core::FieldCore;
pub use self::text::{TextControl, TextField};

use std::rc::Rc;

/// A single value change on a field, delivered to change listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    /// Name of the field that changed (also its storage key).
    pub field: String,
    pub old: String,
    pub new: String,
}

/// Listener invoked synchronously after a user-driven field change.
pub type ChangeListener = Rc<dyn Fn(&FieldChange)>;

/// Common contract for persisted fields: a named durable value with
/// registration-ordered change listeners. There is no listener removal;
/// fields live for the page's lifetime.
pub trait FormField {
    /// The field's name, which is also its storage key.
    fn name(&self) -> &str;

    /// Current value. Always equal to the persisted value once any mutation
    /// has completed.
    fn value(&self) -> String;

    /// Update the value in memory, in storage, and on the owned control.
    /// Does not notify listeners.
    fn set_value(&self, value: &str);

    /// Register a change listener. Listeners run in registration order.
    fn add_change_listener(&self, listener: ChangeListener);
}
