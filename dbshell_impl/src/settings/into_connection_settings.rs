use super::connection_settings::{HOST, NAME, OPTIONS, PASSWORD, PORT, USER};
use crate::{
    ConnectOptions, ConnectionSettings, ConnectionSettingsBuilder, DbShellError, DbShellResult,
};
use serde_json::{Map, Value};

/// A trait implemented by types that can be converted into `ConnectionSettings`.
///
/// Settings records in JSON form are objects with the keys `NAME`, `USER`, `PASSWORD`,
/// `HOST`, `PORT`, and `OPTIONS`; further keys are ignored.
/// `PORT` can be a string or a number.
/// `OPTIONS` is an object whose values are strings, numbers, or booleans.
///
/// # Example
/// ```rust
///     use dbshell::IntoConnectionSettings;
///
///     let settings = r#"{"NAME": "somedbname", "USER": "someuser", "PASSWORD": "somepassword",
///                        "HOST": "somehost", "PORT": "444", "OPTIONS": {}}"#
///         .into_connection_settings()
///         .unwrap();
///
///     assert_eq!("somehost", settings.host());
/// ```
pub trait IntoConnectionSettings {
    /// Converts the value of `self` into `ConnectionSettings`.
    ///
    /// # Errors
    /// `DbShellError::MissingConfigurationKey` if a required key is missing,
    /// `DbShellError::InvalidSetting` or `DbShellError::Settings` if wrong information
    /// was provided.
    fn into_connection_settings(self) -> DbShellResult<ConnectionSettings>;
}

impl IntoConnectionSettings for ConnectionSettings {
    fn into_connection_settings(self) -> DbShellResult<ConnectionSettings> {
        Ok(self)
    }
}

impl IntoConnectionSettings for &ConnectionSettings {
    fn into_connection_settings(self) -> DbShellResult<ConnectionSettings> {
        Ok(self.clone())
    }
}

impl IntoConnectionSettings for ConnectionSettingsBuilder {
    fn into_connection_settings(self) -> DbShellResult<ConnectionSettings> {
        self.build()
    }
}

impl IntoConnectionSettings for &ConnectionSettingsBuilder {
    fn into_connection_settings(self) -> DbShellResult<ConnectionSettings> {
        self.build()
    }
}

impl IntoConnectionSettings for &str {
    fn into_connection_settings(self) -> DbShellResult<ConnectionSettings> {
        serde_json::from_str::<Value>(self)
            .map_err(|e| DbShellError::settings(Box::new(e)))?
            .into_connection_settings()
    }
}

impl IntoConnectionSettings for String {
    fn into_connection_settings(self) -> DbShellResult<ConnectionSettings> {
        self.as_str().into_connection_settings()
    }
}

impl IntoConnectionSettings for Value {
    fn into_connection_settings(self) -> DbShellResult<ConnectionSettings> {
        match self {
            Value::Object(map) => map.into_connection_settings(),
            _ => Err(DbShellError::settings(
                "a settings record must be a JSON object".into(),
            )),
        }
    }
}

impl IntoConnectionSettings for Map<String, Value> {
    fn into_connection_settings(self) -> DbShellResult<ConnectionSettings> {
        let mut builder = ConnectionSettingsBuilder::new();
        builder.name(string_setting(&self, NAME)?);
        builder.user(string_setting(&self, USER)?);
        builder.password(string_setting(&self, PASSWORD)?);
        builder.host(string_setting(&self, HOST)?);
        builder.port(port_setting(&self)?);

        match self.get(OPTIONS) {
            None => return Err(DbShellError::MissingConfigurationKey(OPTIONS)),
            Some(Value::Object(options)) => {
                let mut connect_options = ConnectOptions::new();
                for (key, value) in options {
                    connect_options.insert(key, option_value(key, value)?);
                }
                builder.options(connect_options);
            }
            Some(_) => {
                return Err(DbShellError::invalid_setting(
                    OPTIONS,
                    "expected an object",
                ))
            }
        }
        builder.build()
    }
}

fn required<'a>(map: &'a Map<String, Value>, key: &'static str) -> DbShellResult<&'a Value> {
    map.get(key)
        .ok_or(DbShellError::MissingConfigurationKey(key))
}

fn string_setting<'a>(map: &'a Map<String, Value>, key: &'static str) -> DbShellResult<&'a str> {
    required(map, key)?
        .as_str()
        .ok_or_else(|| DbShellError::invalid_setting(key, "expected a string"))
}

fn port_setting(map: &Map<String, Value>) -> DbShellResult<String> {
    match required(map, PORT)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.is_u64() => Ok(n.to_string()),
        _ => Err(DbShellError::invalid_setting(
            PORT,
            "expected a string or a non-negative integer",
        )),
    }
}

fn option_value(key: &str, value: &Value) -> DbShellResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(DbShellError::invalid_setting(
            format!("{OPTIONS}.{key}"),
            "expected a string, a number, or a boolean",
        )),
    }
}
