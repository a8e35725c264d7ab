//! Persisted field backed by a single free-text control.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use std::rc::Rc;

use crate::storage::KeyValueStore;

use super::core::FieldCore;
use super::{ChangeListener, FormField};

/// Presentation seam for one text control. The browser build implements this
/// over signals driving an `<input>`; tests implement it in memory.
pub trait TextControl {
    /// The control's currently displayed text.
    fn text(&self) -> String;

    /// Replace the displayed text.
    fn set_text(&self, text: &str);

    /// Lock or unlock the control for user editing.
    fn set_read_only(&self, read_only: bool);
}

/// A persisted field that owns exactly one text control. The control's
/// displayed content always mirrors the field's value.
pub struct TextField {
    core: FieldCore,
    control: Rc<dyn TextControl>,
}

impl TextField {
    /// Load the persisted value and push it into the control.
    pub fn new(
        name: &str,
        default: &str,
        control: Rc<dyn TextControl>,
        store: Rc<dyn KeyValueStore>,
    ) -> Self {
        let core = FieldCore::load(name, default, store);
        control.set_text(&core.value());
        Self { core, control }
    }

    /// The user edited the control: read its text and run the
    /// update-and-notify path.
    pub fn commit_edit(&self) {
        let text = self.control.text();
        self.core.commit(&text);
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.control.set_read_only(read_only);
    }
}

impl FormField for TextField {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn value(&self) -> String {
        self.core.value()
    }

    fn set_value(&self, value: &str) {
        self.core.set_value(value);
        self.control.set_text(value);
    }

    fn add_change_listener(&self, listener: ChangeListener) {
        self.core.add_change_listener(listener);
    }
}
