use clap::Parser;
use dbshell::{ClientConfiguration, ConnectionSettings, DatabaseClient, DbShellResult, TlsPolicy};
use flexi_logger::{opt_format, Logger};
use std::{path::PathBuf, process::ExitCode};

/// Starts an interactive SQL shell on a configured database.
#[derive(Debug, Parser)]
#[command(author, name = "dbshell", version)]
struct Cli {
    /// JSON file with one settings record per database alias
    #[arg(short, long, value_name = "FILE")]
    settings: PathBuf,

    /// Alias of the database to connect to
    #[arg(short, long, default_value = "default", value_name = "ALIAS")]
    database: String,

    /// How TLS certificates are handed over to the shell
    #[arg(long, value_enum, default_value_t = CliTlsPolicy::ShellFlags)]
    tls_policy: CliTlsPolicy,

    /// Name or path of the shell program
    #[arg(long, default_value = ClientConfiguration::DEFAULT_EXECUTABLE, value_name = "PROGRAM")]
    executable: String,

    /// Print the shell invocation instead of running it
    #[arg(long)]
    print: bool,

    /// Additional parameters for the shell
    #[arg(last = true, value_name = "PARAMETERS")]
    parameters: Vec<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum CliTlsPolicy {
    ShellFlags,
    UrlParameters,
}
impl From<CliTlsPolicy> for TlsPolicy {
    fn from(policy: CliTlsPolicy) -> Self {
        match policy {
            CliTlsPolicy::ShellFlags => TlsPolicy::ShellFlags,
            CliTlsPolicy::UrlParameters => TlsPolicy::UrlParameters,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG overrides the default log specification
    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.format(opt_format).start())
        .map_err(|e| eprintln!("Logger initialization failed with {e}"))
        .ok();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(code) = e.shell_exit_code() {
                // the shell has already reported its problem
                return ExitCode::from(u8::try_from(code).unwrap_or(1));
            }
            log::debug!("{e:?}");
            eprintln!("dbshell: {}", e.display_with_inner());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> DbShellResult<()> {
    let settings = ConnectionSettings::from_databases_file(&cli.settings, &cli.database)?;
    let client = DatabaseClient::with_configuration(
        ClientConfiguration::default()
            .with_executable(&cli.executable)
            .with_tls_policy(cli.tls_policy.into()),
    );

    if cli.print {
        let shell_command = client.settings_to_cmd_args_env(&settings, &cli.parameters)?;
        println!("{}={}", shell_command.url_env_var(), shell_command.masked_url());
        println!("{}", shell_command.args().join(" "));
        Ok(())
    } else {
        client.runshell(&settings, &cli.parameters)
    }
}
