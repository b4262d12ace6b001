//! Configuration loader.
//!
//! Errors are always returned to the caller. Deciding to abort belongs to
//! the binary's entry point.

use std::path::{Path, PathBuf};

use envboot_env::{Dialect, EnvFile, ProcessEnvironment};
use envboot_types::{
    APP_PORT, Config, ConfigError, ConnectionDescriptor, DB_DBNAME, DB_HOST, DB_NAME, DB_PASSWORD,
    DB_SSLMODE, DB_USER, DEFAULT_ENV_FILE, Environment, REQUIRED_VARIABLES, VariableState,
    VariableStatus,
};

/// Loads `.env` into the process environment and builds a `Config`.
pub fn load_config() -> Result<Config, ConfigError> {
    ConfigLoader::new(ProcessEnvironment::new()).load_config()
}

/// Fails with the first required variable that is unset or empty, in
/// `REQUIRED_VARIABLES` order.
pub fn check_env_variables<E: Environment + ?Sized>(env: &E) -> Result<(), ConfigError> {
    for name in REQUIRED_VARIABLES {
        if env.get_non_empty(name).is_none() {
            return Err(ConfigError::MissingVariable(name.to_string()));
        }
    }
    Ok(())
}

/// Startup configuration loader.
pub struct ConfigLoader<E: Environment> {
    env: E,
    env_file: PathBuf,
    dialect: Dialect,
}

impl<E: Environment> ConfigLoader<E> {
    /// Creates a loader reading `.env` in the literal dialect.
    pub fn new(env: E) -> Self {
        Self {
            env,
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            dialect: Dialect::default(),
        }
    }

    /// Sets the env file read by `load_config`.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn into_env(self) -> E {
        self.env
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    /// Merges the entries of `path` into the environment, overwriting
    /// existing values. A missing or unreadable file loads nothing.
    ///
    /// Returns the number of entries applied.
    pub fn load_env_from_file(&mut self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        let applied = EnvFile::read(path, self.dialect).apply(&mut self.env);
        tracing::debug!(path = %path.display(), entries = applied, "Env file merged");
        applied
    }

    /// Checks the required variables against the current environment.
    pub fn check_env_variables(&self) -> Result<(), ConfigError> {
        check_env_variables(&self.env)
    }

    /// Loads the env file, checks the required variables and builds the
    /// configuration.
    pub fn load_config(&mut self) -> Result<Config, ConfigError> {
        let env_file = self.env_file.clone();
        self.load_env_from_file(&env_file);

        self.check_env_variables()?;

        Ok(self.build_config())
    }

    /// Presence of every known variable. Unlike `check_env_variables` this
    /// does not stop at the first failure.
    pub fn report(&self) -> Vec<VariableStatus> {
        let required = REQUIRED_VARIABLES.iter().map(|&name| (name, true));
        let optional = [(DB_NAME, false), (APP_PORT, false)];

        required
            .chain(optional)
            .map(|(name, required)| VariableStatus {
                name,
                required,
                state: VariableState::of(self.env.get(name).as_deref()),
            })
            .collect()
    }

    // Only reachable once check_env_variables has passed.
    fn build_config(&self) -> Config {
        let dbname = self.env.get_or_empty(DB_NAME);
        if dbname.is_empty() {
            tracing::warn!(
                checked = DB_DBNAME,
                read = DB_NAME,
                "Database name is empty in the connection string"
            );
        }

        let database = ConnectionDescriptor {
            host: self.env.get_or_empty(DB_HOST),
            user: self.env.get_or_empty(DB_USER),
            password: self.env.get_or_empty(DB_PASSWORD),
            dbname,
            sslmode: self.env.get_or_empty(DB_SSLMODE),
        };

        let config = Config::new(database, self.env.get_or_empty(APP_PORT));
        tracing::info!(database = %config.database().redacted(), "Configuration loaded");
        config
    }
}
