use super::connection_settings::{HOST, NAME, OPTIONS, PASSWORD, PORT, USER};
use crate::{ConnectOptions, ConnectionSettings, DbShellError, DbShellResult};
use secstr::SecUtf8;

/// A builder for `ConnectionSettings`.
///
/// ```rust
/// use dbshell::{ConnectOptions, ConnectionSettings};
///
/// let settings = ConnectionSettings::builder()
///     .name("somedbname")
///     .user("someuser")
///     .password("")
///     .host("somehost")
///     .port("")
///     .options(ConnectOptions::new())
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConnectionSettingsBuilder {
    name: Option<String>,
    user: Option<String>,
    password: Option<SecUtf8>,
    host: Option<String>,
    port: Option<String>,
    options: Option<ConnectOptions>,
}

impl ConnectionSettingsBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the database name.
    pub fn name<N: AsRef<str>>(&mut self, name: N) -> &mut Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    /// Sets the database user.
    pub fn user<U: AsRef<str>>(&mut self, user: U) -> &mut Self {
        self.user = Some(user.as_ref().to_owned());
        self
    }

    /// Sets the password.
    pub fn password<P: AsRef<str>>(&mut self, pw: P) -> &mut Self {
        self.password = Some(SecUtf8::from(pw.as_ref()));
        self
    }

    /// Unsets the password.
    pub fn unset_password(&mut self) -> &mut Self {
        self.password = None;
        self
    }

    /// Sets the host.
    pub fn host<H: AsRef<str>>(&mut self, host: H) -> &mut Self {
        self.host = Some(host.as_ref().to_owned());
        self
    }

    /// Sets the port; an empty port is allowed.
    pub fn port<P: AsRef<str>>(&mut self, port: P) -> &mut Self {
        self.port = Some(port.as_ref().to_owned());
        self
    }

    /// Sets all options at once, replacing options that were set before.
    pub fn options(&mut self, options: ConnectOptions) -> &mut Self {
        self.options = Some(options);
        self
    }

    /// Sets a single option.
    pub fn option<K: AsRef<str>, V: AsRef<str>>(&mut self, key: K, value: V) -> &mut Self {
        self.options
            .get_or_insert_with(ConnectOptions::new)
            .insert(key, value);
        self
    }

    /// Constructs `ConnectionSettings` from the builder.
    ///
    /// # Errors
    /// `DbShellError::MissingConfigurationKey` with the first of `NAME`, `USER`, `PASSWORD`,
    /// `HOST`, `PORT`, `OPTIONS` that was not set.
    pub fn build(&self) -> DbShellResult<ConnectionSettings> {
        let name = self
            .name
            .clone()
            .ok_or(DbShellError::MissingConfigurationKey(NAME))?;
        let user = self
            .user
            .clone()
            .ok_or(DbShellError::MissingConfigurationKey(USER))?;
        let password = self
            .password
            .clone()
            .ok_or(DbShellError::MissingConfigurationKey(PASSWORD))?;
        let host = self
            .host
            .clone()
            .ok_or(DbShellError::MissingConfigurationKey(HOST))?;
        let port = self
            .port
            .clone()
            .ok_or(DbShellError::MissingConfigurationKey(PORT))?;
        let options = self
            .options
            .clone()
            .ok_or(DbShellError::MissingConfigurationKey(OPTIONS))?;

        Ok(ConnectionSettings::new(
            name, user, password, host, port, options,
        ))
    }

    /// Getter
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Getter
    pub fn get_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Getter
    pub fn get_password(&self) -> Option<&SecUtf8> {
        self.password.as_ref()
    }

    /// Getter
    pub fn get_host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Getter
    pub fn get_port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Getter
    pub fn get_options(&self) -> Option<&ConnectOptions> {
        self.options.as_ref()
    }
}
