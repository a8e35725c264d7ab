//! Persisted field backed by a group of mutually exclusive controls.

#[cfg(test)]
#[path = "choice_test.rs"]
mod choice_test;

use std::rc::Rc;

use crate::storage::KeyValueStore;

use super::core::FieldCore;
use super::{ChangeListener, FormField};

/// Presentation seam for a choice group sharing one logical field. Selecting
/// a value with no matching control leaves the current selection unchanged.
pub trait ChoiceControl {
    /// Mark the control whose value equals `value` as selected, if any.
    fn select(&self, value: &str);

    /// The value of the currently selected control, if one is selected.
    fn selected(&self) -> Option<String>;
}

/// A persisted field that owns a choice group. Exactly the control whose
/// value equals the field's value is selected, when such a control exists.
pub struct ChoiceField {
    core: FieldCore,
    control: Rc<dyn ChoiceControl>,
}

impl ChoiceField {
    /// Load the persisted value and select the matching control.
    pub fn new(
        name: &str,
        default: &str,
        control: Rc<dyn ChoiceControl>,
        store: Rc<dyn KeyValueStore>,
    ) -> Self {
        let core = FieldCore::load(name, default, store);
        let field = Self { core, control };
        field.select_matching(&field.core.value());
        field
    }

    /// A control in the group became selected: run the update-and-notify
    /// path with its value.
    pub fn commit_selection(&self, value: &str) {
        self.core.commit(value);
    }

    fn select_matching(&self, value: &str) {
        self.control.select(value);
        if self.control.selected().as_deref() != Some(value) {
            log::warn!(
                "field {}: no choice control with value {value:?}",
                self.core.name()
            );
        }
    }
}

impl FormField for ChoiceField {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn value(&self) -> String {
        self.core.value()
    }

    fn set_value(&self, value: &str) {
        self.core.set_value(value);
        self.select_matching(value);
    }

    fn add_change_listener(&self, listener: ChangeListener) {
        self.core.add_change_listener(listener);
    }
}
