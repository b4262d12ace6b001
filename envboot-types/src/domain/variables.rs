//! Variable names read during startup.

use serde::Serialize;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_DBNAME: &str = "DB_DBNAME";
pub const DB_SSLMODE: &str = "DB_SSLMODE";

/// Database name as read by the connection descriptor.
///
/// Deployed `.env` files validate `DB_DBNAME` but format `DB_NAME`; both
/// names are honored as-is.
pub const DB_NAME: &str = "DB_NAME";

/// Optional application port.
pub const APP_PORT: &str = "APP_PORT";

/// Env file read by `load_config`, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Variables that must be present and non-empty, checked in this order.
pub const REQUIRED_VARIABLES: [&str; 5] = [DB_HOST, DB_USER, DB_PASSWORD, DB_DBNAME, DB_SSLMODE];

/// Presence of a single variable in an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableState {
    Present,
    Empty,
    Missing,
}

impl VariableState {
    /// Classifies a looked-up value.
    pub fn of(value: Option<&str>) -> Self {
        match value {
            Some("") => VariableState::Empty,
            Some(_) => VariableState::Present,
            None => VariableState::Missing,
        }
    }

    /// Returns true if the variable satisfies the required check.
    pub fn is_satisfied(self) -> bool {
        self == VariableState::Present
    }
}

impl std::fmt::Display for VariableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VariableState::Present => "present",
            VariableState::Empty => "empty",
            VariableState::Missing => "missing",
        };
        f.pad(s)
    }
}

/// Report line for one variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableStatus {
    pub name: &'static str,
    pub required: bool,
    pub state: VariableState,
}

impl VariableStatus {
    /// A required variable that is empty or missing.
    pub fn is_failing(&self) -> bool {
        self.required && !self.state.is_satisfied()
    }
}
