//! # Envboot Types
//!
//! Domain types and port traits for the startup configuration loader.
//! This crate does no IO: only data structures, the required-variable
//! contract, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - `Config`, `ConnectionDescriptor`, variable names
//! - `ports/` - the `Environment` trait that adapters implement
//! - `error/` - `ConfigError`

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{
    APP_PORT, Config, ConnectionDescriptor, DB_DBNAME, DB_HOST, DB_NAME, DB_PASSWORD, DB_SSLMODE,
    DB_USER, DEFAULT_APP_PORT, DEFAULT_ENV_FILE, REQUIRED_VARIABLES, VariableState,
    VariableStatus,
};
pub use error::ConfigError;
pub use ports::Environment;
