// Translation of connection settings into a shell invocation, and running the shell.

mod client_configuration;
mod cmd_url;
mod database_client;
mod shell_command;

pub use {
    client_configuration::{ClientConfiguration, TlsPolicy},
    database_client::DatabaseClient,
    shell_command::ShellCommand,
};
