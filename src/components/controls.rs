//! Signal-backed implementations of the field control seams.
//!
//! The view renders from these signals (`prop:value`, `prop:readonly`,
//! `prop:checked`) while the field layer drives them through the same traits
//! the native tests stub out.

use leptos::prelude::*;

use crate::fields::{ChoiceControl, TextControl};

/// Text control surfaced as a pair of signals.
#[derive(Clone, Copy)]
pub struct SignalTextControl {
    pub text: RwSignal<String>,
    pub read_only: RwSignal<bool>,
}

impl SignalTextControl {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(String::new()),
            read_only: RwSignal::new(false),
        }
    }
}

impl Default for SignalTextControl {
    fn default() -> Self {
        Self::new()
    }
}

impl TextControl for SignalTextControl {
    fn text(&self) -> String {
        self.text.get_untracked()
    }

    fn set_text(&self, text: &str) {
        self.text.set(text.to_owned());
    }

    fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

/// Choice group surfaced as a selected-value signal over a fixed option set.
#[derive(Clone, Copy)]
pub struct SignalChoiceControl {
    pub selected: RwSignal<String>,
    options: &'static [&'static str],
}

impl SignalChoiceControl {
    pub fn new(options: &'static [&'static str]) -> Self {
        Self {
            selected: RwSignal::new(String::new()),
            options,
        }
    }
}

impl ChoiceControl for SignalChoiceControl {
    fn select(&self, value: &str) {
        if self.options.contains(&value) {
            self.selected.set(value.to_owned());
        }
    }

    fn selected(&self) -> Option<String> {
        let value = self.selected.get_untracked();
        if value.is_empty() { None } else { Some(value) }
    }
}
