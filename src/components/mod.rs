//! Planner form components.
//!
//! Components read the signal bundle and the shared form handle from Leptos
//! context; user edits flow through the field layer's commit paths.

pub mod controls;
pub mod coordinate_triple;
pub mod distance_row;
pub mod mode_selector;
