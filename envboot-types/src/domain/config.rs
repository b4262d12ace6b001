//! Configuration value produced at startup.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Port used by callers when `APP_PORT` is empty or unparseable.
pub const DEFAULT_APP_PORT: u16 = 3000;

const REDACTED: &str = "****";

/// Database connection fields, each sourced from its own variable.
///
/// `Display` renders the libpq keyword/value form:
/// `host=<h> user=<u> password=<p> dbname=<n> sslmode=<s>`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ConnectionDescriptor {
    pub host: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: String,
}

impl ConnectionDescriptor {
    /// Same as `to_string()` but with the password masked.
    pub fn redacted(&self) -> String {
        self.render(REDACTED)
    }

    fn render(&self, password: &str) -> String {
        format!(
            "host={} user={} password={} dbname={} sslmode={}",
            self.host, self.user, password, self.dbname, self.sslmode
        )
    }
}

impl fmt::Display for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&self.password))
    }
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .field("dbname", &self.dbname)
            .field("sslmode", &self.sslmode)
            .finish()
    }
}

/// Application configuration.
///
/// Built once by the loader after every required variable has been
/// checked. Fields are private and there are no setters.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    database: ConnectionDescriptor,
    db_connection_string: String,
    app_port: String,
}

impl Config {
    pub fn new(database: ConnectionDescriptor, app_port: impl Into<String>) -> Self {
        let db_connection_string = database.to_string();
        Self {
            database,
            db_connection_string,
            app_port: app_port.into(),
        }
    }

    /// Formatted connection descriptor, password included.
    pub fn db_connection_string(&self) -> &str {
        &self.db_connection_string
    }

    pub fn database(&self) -> &ConnectionDescriptor {
        &self.database
    }

    /// Raw port value. Empty when `APP_PORT` was not set.
    pub fn app_port(&self) -> &str {
        &self.app_port
    }

    /// Parses the port, falling back to `default` if it is empty or invalid.
    pub fn port_or(&self, default: u16) -> u16 {
        self.app_port.parse().unwrap_or(default)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_connection_string", &self.database.redacted())
            .field("app_port", &self.app_port)
            .finish()
    }
}

// Serialized output is always redacted.
impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Config", 2)?;
        state.serialize_field("db_connection_string", &self.database.redacted())?;
        state.serialize_field("app_port", &self.app_port)?;
        state.end()
    }
}
