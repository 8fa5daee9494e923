//! Constants for the connection URLs and shell invocations produced by this crate.
//!
//! The shell is started with an environment variable that carries the connection URL.
//! Such a URL has the form
//!
//! ```text
//! postgresql://<user>:<password>@<host>:<port>/<dbname>[<options>]
//! ```
//! where
//! > `<user>` = the name of the DB user, percent-encoded
//! > `<password>` = the password of the DB user, percent-encoded; can be empty
//! > `<host>` = the host where the database can be found
//! > `<port>` = the port at which the database can be found on `<host>`; can be empty
//! > `<dbname>` = the database to connect to
//! > `<options>` = `?<key>=<value>[{&<key>=<value>}]`, keys and values percent-encoded
//!
//! __The options are written in this order:__
//! - `sslmode=<value>`, unless the mode is `disable` or not given
//! - `sslrootcert=<path>`, `sslcert=<path>`, `sslkey=<path>`, unless they are
//!   consumed by a `--certs-dir` shell flag
//! - `options=<value>`: libpq-style options, like `--cluster=<routing-id>`
//! - all other options, in the order in which they were configured
//!
//! Keys and values are percent-encoded: every byte except the unreserved characters
//! `A-Z a-z 0-9 - . _ ~` is written as `%XX`, a space becomes `%20`.

/// Scheme of the connection URL.
pub const POSTGRESQL: &str = "postgresql";

/// Default name of the shell program.
pub const COCKROACH: &str = "cockroach";

/// Default subcommand that starts the interactive SQL shell.
pub const SQL: &str = "sql";

/// Default name of the environment variable that carries the connection URL.
pub const COCKROACH_URL: &str = "COCKROACH_URL";

/// Option-key for the TLS negotiation mode.
pub const SSLMODE: &str = "sslmode";

/// Option-key for the path of the CA bundle that is used to verify the server.
pub const SSLROOTCERT: &str = "sslrootcert";

/// Option-key for the path of the client certificate.
pub const SSLCERT: &str = "sslcert";

/// Option-key for the path of the client key.
pub const SSLKEY: &str = "sslkey";

/// Option-key for libpq-style options, e.g. `--cluster=<routing-id>`.
pub const OPTIONS: &str = "options";

/// Shell flag for a connection without TLS.
pub const INSECURE_FLAG: &str = "--insecure";

/// Shell flag that points to the directory with the certificates.
pub const CERTS_DIR_FLAG: &str = "--certs-dir";

/// The option-keys with a fixed position in the query string, in that order.
pub(crate) const ORDERED_KEYS: [&str; 5] = [SSLMODE, SSLROOTCERT, SSLCERT, SSLKEY, OPTIONS];
