//! Domain types for startup configuration.

mod config;
mod variables;

pub use config::{Config, ConnectionDescriptor, DEFAULT_APP_PORT};
pub use variables::{
    APP_PORT, DB_DBNAME, DB_HOST, DB_NAME, DB_PASSWORD, DB_SSLMODE, DB_USER, DEFAULT_ENV_FILE,
    REQUIRED_VARIABLES, VariableState, VariableStatus,
};
