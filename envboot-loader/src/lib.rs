//! # Envboot Loader
//!
//! Loads startup configuration:
//! 1. merge the optional env file into an environment
//! 2. check the required variables
//! 3. build an immutable `Config`
//!
//! `ConfigLoader` is generic over `E: Environment`, so callers choose
//! between the process table and an explicit in-memory map.

pub mod loader;


pub use loader::{ConfigLoader, check_env_variables, load_config};
