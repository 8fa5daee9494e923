use secstr::SecUtf8;
use std::{collections::BTreeMap, process::Command};

/// The invocation of an interactive SQL shell: the argument vector,
/// and the environment entry that carries the connection URL.
///
/// The URL contains the password; `Debug` does not show it,
/// and `Display` shows the URL with a masked password.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShellCommand {
    args: Vec<String>,
    env_var: String,
    url: SecUtf8,
    masked_url: String,
}

impl ShellCommand {
    pub(crate) fn new(args: Vec<String>, env_var: String, url: String, masked_url: String) -> Self {
        Self {
            args,
            env_var,
            url: SecUtf8::from(url),
            masked_url,
        }
    }

    /// The shell program, i.e. the first element of the argument vector.
    pub fn program(&self) -> &str {
        self.args.first().map_or("", String::as_str)
    }

    /// The complete argument vector, starting with the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The environment variables that have to be set for the shell.
    pub fn env(&self) -> BTreeMap<&str, &str> {
        std::iter::once((self.env_var.as_str(), self.url.unsecure())).collect()
    }

    /// The name of the environment variable that carries the connection URL.
    pub fn url_env_var(&self) -> &str {
        &self.env_var
    }

    /// The connection URL.
    pub fn url(&self) -> &SecUtf8 {
        &self.url
    }

    /// The connection URL with a masked password.
    pub fn masked_url(&self) -> &str {
        &self.masked_url
    }

    /// Creates a `Command` that runs the shell.
    ///
    /// The shell inherits the environment of the current process, plus [`ShellCommand::env`].
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args.iter().skip(1)).envs(self.env());
        command
    }
}

impl std::fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}={}", self.env_var, self.masked_url)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::ShellCommand;

    #[test]
    fn test_shell_command() {
        let shell_command = ShellCommand::new(
            vec!["cockroach".to_string(), "sql".to_string(), "--insecure".to_string()],
            "COCKROACH_URL".to_string(),
            "postgresql://u:secret@h:1/d".to_string(),
            "postgresql://u:***@h:1/d".to_string(),
        );
        assert_eq!("cockroach", shell_command.program());
        assert_eq!(
            Some(&"postgresql://u:secret@h:1/d"),
            shell_command.env().get("COCKROACH_URL")
        );
        assert_eq!(1, shell_command.env().len());
        assert!(!format!("{shell_command:?}").contains("secret"));
        assert_eq!(
            "COCKROACH_URL=postgresql://u:***@h:1/d cockroach sql --insecure",
            shell_command.to_string()
        );

        let command = shell_command.to_command();
        assert_eq!("cockroach", command.get_program());
        assert_eq!(
            vec!["sql", "--insecure"],
            command.get_args().collect::<Vec<_>>()
        );
        assert_eq!(1, command.get_envs().count());
    }
}
