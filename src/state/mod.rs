//! Application state modules.
//!
//! State is built once at page start and passed by reference to wiring and
//! view code; there are no free-standing global field instances.

pub mod route;
