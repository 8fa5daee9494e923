//! Translates database connection settings into an invocation of an interactive SQL shell.
//!
//! `dbshell` takes the connection settings of a database (name, user, password, host, port,
//! and options like the TLS configuration) and produces
//!
//! - the argument vector for starting the SQL shell (`cockroach sql ...` by default), and
//! - the environment variable that carries the complete connection URL (`COCKROACH_URL`).
//!
//! The translation is a pure function; starting the shell is optional,
//! see [`DatabaseClient::runshell`].
//!
//! See [code examples](crate::code_examples) for an overview.
//!

// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/dbshell/0.1.0")]
#![deny(missing_debug_implementations)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

/// A collection of settings that determine the shell invocation.
///
/// Defines the shell program (default: `cockroach`), its subcommand (default: `sql`),
/// the environment variable for the connection URL (default: `COCKROACH_URL`),
/// and how TLS certificates are handed over to the shell (see [`TlsPolicy`]).
///
/// # Example
///
/// ```rust
/// # use dbshell::{ClientConfiguration, DatabaseClient, TlsPolicy};
/// let config = ClientConfiguration::default()
///     .with_executable("/opt/cockroach/cockroach")
///     .with_tls_policy(TlsPolicy::UrlParameters);
/// let client = DatabaseClient::with_configuration(config);
/// ```
pub use dbshell_impl::ClientConfiguration;

pub use dbshell_impl::{
    keys, url, ConnectOptions, ConnectionSettings, ConnectionSettingsBuilder, DatabaseClient,
    DbShellError, DbShellResult, IntoConnectionSettings, SecUtf8, ShellCommand, SslMode,
    TlsPolicy,
};

pub mod code_examples;
