use thiserror::Error;

/// A list specifying categories of [`DbShellError`](crate::DbShellError).
///
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DbShellError {
    /// One of the required settings keys (`NAME`, `USER`, `PASSWORD`, `HOST`, `PORT`, `OPTIONS`)
    /// is not present; the contained value is the name of the first missing key.
    #[error("Missing configuration key: {}", _0)]
    MissingConfigurationKey(&'static str),

    /// A settings key is present, but its value cannot be used.
    #[error("Invalid value for setting '{key}': {reason}")]
    InvalidSetting {
        /// The name of the offending key.
        key: String,
        /// What is wrong with the value.
        reason: &'static str,
    },

    /// The settings document could not be read or parsed, e.g. because of malformed JSON.
    #[error("Erroneous settings document")]
    Settings {
        /// The causing Error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The settings document has no entry for the requested database alias.
    #[error("The connection '{}' doesn't exist", _0)]
    UnknownDatabaseAlias(String),

    /// The shell program could not be found.
    #[error("You appear not to have the '{}' program installed or on your path", _0)]
    ExecutableNotFound(String),

    /// The shell program terminated unsuccessfully.
    #[error("The shell terminated with {status}")]
    ShellFailed {
        /// The exit status of the shell process.
        status: std::process::ExitStatus,
    },

    /// Error occured while interacting with the operating system.
    #[error(transparent)]
    Io {
        /// The causing Error.
        #[from]
        source: std::io::Error,
    },
}

/// Abbreviation of `Result<T, DbShellError>`.
pub type DbShellResult<T> = std::result::Result<T, DbShellError>;

impl DbShellError {
    /// Reveal the inner error
    pub fn inner(&self) -> Option<&dyn std::error::Error> {
        match self {
            Self::Settings { source } => Some(&**source),
            Self::Io { source } => Some(source),
            _ => None,
        }
    }

    /// Returns the exit code of the shell, if the shell failed with one.
    pub fn shell_exit_code(&self) -> Option<i32> {
        match self {
            Self::ShellFailed { status } => status.code(),
            _ => None,
        }
    }

    /// Returns the error message, followed by the messages of the inner errors.
    pub fn display_with_inner(&self) -> String {
        let mut s = self.to_string();
        // a transparent variant displays its source already
        let mut inner = match self {
            Self::Io { source } => std::error::Error::source(source),
            _ => self.inner(),
        };
        while let Some(e) = inner {
            s.push_str(&format!("\n  caused by: {e}"));
            inner = e.source();
        }
        s
    }

    pub(crate) fn settings(error: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        Self::Settings { source: error }
    }

    pub(crate) fn invalid_setting<K: AsRef<str>>(key: K, reason: &'static str) -> Self {
        Self::InvalidSetting {
            key: key.as_ref().to_owned(),
            reason,
        }
    }
}
