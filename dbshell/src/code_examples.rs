//! Code examples.
//!
//! # 1. Connection settings
//!
//! Settings records can be built programmatically
//! (see also [`ConnectionSettings`](crate::ConnectionSettings)):
//!
//! ```rust
//! use dbshell::ConnectionSettings;
//! # use dbshell::DbShellResult;
//! # fn foo() -> DbShellResult<()> {
//! let settings = ConnectionSettings::builder()
//!     .name("bank")
//!     .user("maxroach")
//!     .password("")
//!     .host("localhost")
//!     .port("26257")
//!     .option("sslmode", "verify-full")
//!     .option("sslrootcert", "certs/ca.crt")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! or read from JSON, e.g. from a file with one settings record per database alias:
//!
//! ```rust,no_run
//! use dbshell::ConnectionSettings;
//! # use dbshell::DbShellResult;
//! # fn foo() -> DbShellResult<()> {
//! // {"default": {"NAME": "bank", "USER": "maxroach", "PASSWORD": "", "HOST": "localhost",
//! //              "PORT": 26257, "OPTIONS": {"sslmode": "disable"}}}
//! let settings = ConnectionSettings::from_databases_file("databases.json", "default")?;
//! # Ok(())
//! # }
//! ```
//!
//! A missing key is reported as [`DbShellError::MissingConfigurationKey`](crate::DbShellError):
//!
//! ```rust
//! use dbshell::{DbShellError, IntoConnectionSettings};
//!
//! let err = r#"{"NAME": "bank"}"#.into_connection_settings().unwrap_err();
//! assert!(matches!(err, DbShellError::MissingConfigurationKey("USER")));
//! ```
//!
//! # 2. Shell invocation
//!
//! [`DatabaseClient::settings_to_cmd_args_env`](crate::DatabaseClient::settings_to_cmd_args_env)
//! produces the argument vector and the environment:
//!
//! ```rust
//! use dbshell::DatabaseClient;
//! # use dbshell::DbShellResult;
//! # fn foo() -> DbShellResult<()> {
//! let shell_command = DatabaseClient::new().settings_to_cmd_args_env(
//!     r#"{"NAME": "bank", "USER": "maxroach", "PASSWORD": "", "HOST": "localhost",
//!         "PORT": 26257, "OPTIONS": {"sslmode": "verify-full", "sslrootcert": "certs/ca.crt"}}"#,
//!     ["--echo-sql"],
//! )?;
//! assert_eq!(
//!     ["cockroach", "sql", "--certs-dir=certs", "--echo-sql"],
//!     shell_command.args()
//! );
//! assert_eq!(
//!     "postgresql://maxroach:@localhost:26257/bank?sslmode=verify-full",
//!     shell_command.env()["COCKROACH_URL"]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! With [`TlsPolicy::UrlParameters`](crate::TlsPolicy), the certificate paths
//! go into the URL instead:
//!
//! ```rust
//! use dbshell::{ClientConfiguration, DatabaseClient, TlsPolicy};
//! # use dbshell::DbShellResult;
//! # fn foo() -> DbShellResult<()> {
//! let client = DatabaseClient::with_configuration(
//!     ClientConfiguration::default().with_tls_policy(TlsPolicy::UrlParameters),
//! );
//! let shell_command = client.settings_to_cmd_args_env(
//!     r#"{"NAME": "bank", "USER": "maxroach", "PASSWORD": "", "HOST": "localhost",
//!         "PORT": 26257, "OPTIONS": {"sslmode": "verify-full", "sslrootcert": "certs/ca.crt"}}"#,
//!     Vec::<String>::new(),
//! )?;
//! assert_eq!(["cockroach", "sql"], shell_command.args());
//! assert_eq!(
//!     "postgresql://maxroach:@localhost:26257/bank\
//!      ?sslmode=verify-full&sslrootcert=certs%2Fca.crt",
//!     shell_command.env()["COCKROACH_URL"]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # 3. Running the shell
//!
//! ```rust,no_run
//! use dbshell::{ConnectionSettings, DatabaseClient};
//! # use dbshell::DbShellResult;
//! # fn foo() -> DbShellResult<()> {
//! let settings = ConnectionSettings::from_databases_file("databases.json", "default")?;
//! DatabaseClient::new().runshell(&settings, ["--format=table"])?;
//! # Ok(())
//! # }
//! ```
