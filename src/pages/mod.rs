//! Route components for each page.

pub mod planner;
