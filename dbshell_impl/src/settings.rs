// The settings record that describes how to reach a database, and how it is created.

mod connect_options;
mod connection_settings;
mod connection_settings_builder;
mod into_connection_settings;
mod ssl_mode;

pub use {
    connect_options::ConnectOptions,
    connection_settings::{ConnectionSettings, HOST, NAME, OPTIONS, PASSWORD, PORT, USER},
    connection_settings_builder::ConnectionSettingsBuilder,
    into_connection_settings::IntoConnectionSettings,
    ssl_mode::SslMode,
};
