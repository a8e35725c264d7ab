//! Utility helpers shared across planner modules.

pub mod numeric;
