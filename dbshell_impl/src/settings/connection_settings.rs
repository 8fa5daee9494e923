//! Connection settings
use crate::{
    ConnectOptions, ConnectionSettingsBuilder, DbShellError, DbShellResult, IntoConnectionSettings,
};
use secstr::SecUtf8;
use serde_json::{Map, Value};
use std::path::Path;

/// Settings key for the database name.
pub const NAME: &str = "NAME";
/// Settings key for the database user.
pub const USER: &str = "USER";
/// Settings key for the password.
pub const PASSWORD: &str = "PASSWORD";
/// Settings key for the host.
pub const HOST: &str = "HOST";
/// Settings key for the port.
pub const PORT: &str = "PORT";
/// Settings key for the options.
pub const OPTIONS: &str = "OPTIONS";

/// An immutable struct with all information that is necessary to start a shell
/// on a database.
///
/// All six parts are required; `PASSWORD` and `PORT` can be empty.
///
/// # Instantiating `ConnectionSettings` using the `ConnectionSettingsBuilder`
///
/// ```rust
/// use dbshell::ConnectionSettings;
///
/// let settings = ConnectionSettings::builder()
///     .name("somedbname")
///     .user("someuser")
///     .password("somepassword")
///     .host("somehost")
///     .port("26257")
///     .option("sslmode", "verify-full")
///     .build()
///     .unwrap();
/// ```
///
/// # Instantiating `ConnectionSettings` from JSON
///
/// ```rust
/// use dbshell::IntoConnectionSettings;
///
/// let settings = r#"{
///     "NAME": "somedbname", "USER": "someuser", "PASSWORD": "", "HOST": "somehost",
///     "PORT": 26257, "OPTIONS": {}
/// }"#
/// .into_connection_settings()
/// .unwrap();
/// assert_eq!("26257", settings.port());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionSettings {
    name: String,
    user: String,
    password: SecUtf8,
    host: String,
    port: String,
    options: ConnectOptions,
}

impl ConnectionSettings {
    pub(crate) fn new(
        name: String,
        user: String,
        password: SecUtf8,
        host: String,
        port: String,
        options: ConnectOptions,
    ) -> Self {
        Self {
            name,
            user,
            password,
            host,
            port,
            options,
        }
    }

    /// Returns a new builder for `ConnectionSettings`.
    pub fn builder() -> ConnectionSettingsBuilder {
        ConnectionSettingsBuilder::new()
    }

    /// Reads a single settings record (a JSON object) from the given file.
    ///
    /// # Errors
    /// `DbShellError::Settings` if the file cannot be read or parsed,
    /// `DbShellError::MissingConfigurationKey` and `DbShellError::InvalidSetting`
    /// if the record is incomplete or contains unusable values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DbShellResult<Self> {
        read_json(path.as_ref())?.into_connection_settings()
    }

    /// Reads the settings record with the given alias from a file that contains
    /// a JSON object with one settings record per alias, like
    /// `{"default": {"NAME": ..., ...}, "replica": {...}}`.
    ///
    /// # Errors
    /// `DbShellError::UnknownDatabaseAlias` if there is no record for the alias,
    /// and the errors of [`ConnectionSettings::from_file`].
    pub fn from_databases_file<P: AsRef<Path>>(path: P, alias: &str) -> DbShellResult<Self> {
        match read_json(path.as_ref())? {
            Value::Object(mut databases) => databases
                .remove(alias)
                .ok_or_else(|| DbShellError::UnknownDatabaseAlias(alias.to_string()))?
                .into_connection_settings(),
            _ => Err(DbShellError::settings(
                "a databases file must contain a JSON object".into(),
            )),
        }
    }

    /// The name of the database.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The database user.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The password.
    pub fn password(&self) -> &SecUtf8 {
        &self.password
    }

    /// The host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port, as it was configured.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// The options.
    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }
}

fn read_json(path: &Path) -> DbShellResult<Value> {
    trace!("reading settings from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| DbShellError::settings(Box::new(e)))?;
    serde_json::from_str(&content).map_err(|e| DbShellError::settings(Box::new(e)))
}

impl<'de> serde::de::Deserialize<'de> for ConnectionSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        <Map<String, Value> as serde::de::Deserialize>::deserialize(deserializer)?
            .into_connection_settings()
            .map_err(serde::de::Error::custom)
    }
}
