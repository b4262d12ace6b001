//! Error types for configuration loading.

/// Configuration errors.
///
/// Reading the env file never fails, so a missing required variable is the
/// only way loading can go wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingVariable(String),
}

impl ConfigError {
    /// Name of the variable that caused the failure.
    pub fn variable(&self) -> &str {
        match self {
            ConfigError::MissingVariable(name) => name,
        }
    }
}
