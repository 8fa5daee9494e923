// docu is written at re-exports of the frontend crate (dbshell/lib.rs)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ClientConfiguration {
    executable: String,
    subcommand: String,
    url_env_var: String,
    tls_policy: TlsPolicy,
}

/// Describes how the TLS certificate options are handed over to the shell.
///
/// `sslmode` is handled the same way with both policies: a missing, empty or `disable` mode
/// leads to the shell flag `--insecure`, all other modes are written into the URL.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TlsPolicy {
    /// `sslrootcert` is converted into the shell flag `--certs-dir=<directory of sslrootcert>`,
    /// which replaces `--insecure`; `sslrootcert`, `sslcert`, and `sslkey` are then not written
    /// into the URL. A certificate directory is not used if `sslmode` is `disable`.
    #[default]
    ShellFlags,
    /// `sslrootcert`, `sslcert`, and `sslkey` are written into the URL; no `--certs-dir` flag.
    UrlParameters,
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self {
            executable: Self::DEFAULT_EXECUTABLE.to_string(),
            subcommand: Self::DEFAULT_SUBCOMMAND.to_string(),
            url_env_var: Self::DEFAULT_URL_ENV_VAR.to_string(),
            tls_policy: TlsPolicy::default(),
        }
    }
}
impl ClientConfiguration {
    /// Default name of the shell program.
    pub const DEFAULT_EXECUTABLE: &'static str = crate::url::COCKROACH;

    /// Default subcommand of the shell program that opens the interactive SQL shell.
    pub const DEFAULT_SUBCOMMAND: &'static str = crate::url::SQL;

    /// Default name of the environment variable through which the connection URL is handed
    /// over to the shell.
    pub const DEFAULT_URL_ENV_VAR: &'static str = crate::url::COCKROACH_URL;

    /// Returns the name of the shell program.
    pub fn executable(&self) -> &str {
        &self.executable
    }
    /// Sets the name of the shell program.
    pub fn set_executable<E: AsRef<str>>(&mut self, executable: E) {
        self.executable = executable.as_ref().to_owned();
    }
    /// Builder-method for setting the name of the shell program.
    #[must_use]
    pub fn with_executable<E: AsRef<str>>(mut self, executable: E) -> Self {
        self.set_executable(executable);
        self
    }

    /// Returns the subcommand.
    pub fn subcommand(&self) -> &str {
        &self.subcommand
    }
    /// Sets the subcommand.
    pub fn set_subcommand<S: AsRef<str>>(&mut self, subcommand: S) {
        self.subcommand = subcommand.as_ref().to_owned();
    }
    /// Builder-method for setting the subcommand.
    #[must_use]
    pub fn with_subcommand<S: AsRef<str>>(mut self, subcommand: S) -> Self {
        self.set_subcommand(subcommand);
        self
    }

    /// Returns the name of the environment variable for the connection URL.
    pub fn url_env_var(&self) -> &str {
        &self.url_env_var
    }
    /// Sets the name of the environment variable for the connection URL.
    pub fn set_url_env_var<V: AsRef<str>>(&mut self, url_env_var: V) {
        self.url_env_var = url_env_var.as_ref().to_owned();
    }
    /// Builder-method for setting the name of the environment variable for the connection URL.
    #[must_use]
    pub fn with_url_env_var<V: AsRef<str>>(mut self, url_env_var: V) -> Self {
        self.set_url_env_var(url_env_var);
        self
    }

    /// Returns the TLS policy.
    pub fn tls_policy(&self) -> TlsPolicy {
        self.tls_policy
    }
    /// Sets the TLS policy.
    pub fn set_tls_policy(&mut self, tls_policy: TlsPolicy) {
        self.tls_policy = tls_policy;
    }
    /// Builder-method for setting the TLS policy.
    #[must_use]
    pub fn with_tls_policy(mut self, tls_policy: TlsPolicy) -> Self {
        self.tls_policy = tls_policy;
        self
    }
}

#[cfg(test)]
mod test {
    use super::{ClientConfiguration, TlsPolicy};

    #[test]
    fn test_client_configuration() {
        let config = ClientConfiguration::default();
        assert_eq!("cockroach", config.executable());
        assert_eq!("sql", config.subcommand());
        assert_eq!("COCKROACH_URL", config.url_env_var());
        assert_eq!(TlsPolicy::ShellFlags, config.tls_policy());

        let config = config
            .with_executable("/opt/cockroach/bin/cockroach")
            .with_subcommand("demo")
            .with_url_env_var("DATABASE_URL")
            .with_tls_policy(TlsPolicy::UrlParameters);
        assert_eq!("/opt/cockroach/bin/cockroach", config.executable());
        assert_eq!("demo", config.subcommand());
        assert_eq!("DATABASE_URL", config.url_env_var());
        assert_eq!(TlsPolicy::UrlParameters, config.tls_policy());
    }
}
