//! Port traits (interfaces for adapters).
//!
//! The loader depends on these traits, not on the process environment.

mod environment;

pub use environment::Environment;
