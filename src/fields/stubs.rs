//! In-memory control doubles for native tests.

use std::cell::{Cell, RefCell};

use super::choice::ChoiceControl;
use super::text::TextControl;

#[derive(Default)]
pub struct StubTextControl {
    pub text: RefCell<String>,
    pub read_only: Cell<bool>,
}

impl StubTextControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into the control (without committing).
    pub fn type_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
    }
}

impl TextControl for StubTextControl {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
    }

    fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

pub struct StubChoiceControl {
    pub options: Vec<String>,
    pub selected: RefCell<Option<String>>,
}

impl StubChoiceControl {
    pub fn new(options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|o| (*o).to_owned()).collect(),
            selected: RefCell::new(None),
        }
    }
}

impl ChoiceControl for StubChoiceControl {
    fn select(&self, value: &str) {
        if self.options.iter().any(|o| o == value) {
            *self.selected.borrow_mut() = Some(value.to_owned());
        }
    }

    fn selected(&self) -> Option<String> {
        self.selected.borrow().clone()
    }
}
