//! Do not use this crate directly.
//!
//! This is the implementation crate for `dbshell`.
//!

#![deny(missing_debug_implementations)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate log;

mod client;
mod dbshell_error;
mod settings;
pub mod url;

pub use crate::client::{ClientConfiguration, DatabaseClient, ShellCommand, TlsPolicy};
pub use crate::dbshell_error::{DbShellError, DbShellResult};
pub use crate::settings::{
    ConnectOptions, ConnectionSettings, ConnectionSettingsBuilder, IntoConnectionSettings, SslMode,
};

/// The keys of a settings record.
pub mod keys {
    pub use crate::settings::{HOST, NAME, OPTIONS, PASSWORD, PORT, USER};
}

/// Secret strings, as used for passwords and connection URLs.
pub use secstr::SecUtf8;
