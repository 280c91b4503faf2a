use std::collections::BTreeMap;
use std::io::Write;

mod cd;
mod clear;
mod date;
mod exit;
mod help;
mod history;
mod ls;
mod mkdir;
mod pwd;
mod whoami;

pub use cd::CdCommand;
pub use clear::ClearCommand;
pub use date::DateCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use pwd::PwdCommand;
pub use whoami::WhoamiCommand;

use super::Session;

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    Usage(String),
    Os {
        context: String,
        source: std::io::Error,
    },
    Execution(String),
    Io(std::io::Error),
}

impl CommandError {
    pub(crate) fn os(context: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Os {
            context: context.into(),
            source,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => {
                write!(f, "unknown command \"{}\" (type \"help\" for list)", cmd)
            }
            CommandError::Usage(msg) => write!(f, "{}", msg),
            CommandError::Os { context, source } => write!(f, "{}: {}", context, source),
            CommandError::Execution(msg) => write!(f, "{}", msg),
            CommandError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Os { source, .. } => Some(source),
            CommandError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

/// What the loop should do once a built-in has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Ls(LsCommand),
    Pwd(PwdCommand),
    Cd(CdCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
    Date(DateCommand),
    Whoami(WhoamiCommand),
    History(HistoryCommand),
    Mkdir(MkdirCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, session, out),
            CommandType::Ls(cmd) => cmd.execute(args, session, out),
            CommandType::Pwd(cmd) => cmd.execute(args, session, out),
            CommandType::Cd(cmd) => cmd.execute(args, session, out),
            CommandType::Clear(cmd) => cmd.execute(args, session, out),
            CommandType::Help(cmd) => cmd.execute(args, session, out),
            CommandType::Date(cmd) => cmd.execute(args, session, out),
            CommandType::Whoami(cmd) => cmd.execute(args, session, out),
            CommandType::History(cmd) => cmd.execute(args, session, out),
            CommandType::Mkdir(cmd) => cmd.execute(args, session, out),
        }
    }
}

/// The fixed table of built-ins, keyed by exact (case-sensitive) name.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("ls", CommandType::Ls(LsCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand::new()));
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("clear", CommandType::Clear(ClearCommand::new()));
        commands.insert("help", CommandType::Help(HelpCommand::new()));
        commands.insert("date", CommandType::Date(DateCommand::new()));
        commands.insert("whoami", CommandType::Whoami(WhoamiCommand::new()));
        commands.insert("history", CommandType::History(HistoryCommand::new()));
        commands.insert("mkdir", CommandType::Mkdir(MkdirCommand::new()));

        Self { commands }
    }

    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let cmd = self
            .commands
            .get(command)
            .ok_or_else(|| CommandError::NotFound(command.to_string()))?;

        log::debug!("dispatching {} with {} argument(s)", command, args.len());
        cmd.execute(args, session, out)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(executor: &CommandExecutor, command: &str, args: &[&str]) -> Result<(Outcome, String), CommandError> {
        let mut session = Session::new();
        let mut out = Vec::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let outcome = executor.execute(command, &args, &mut session, &mut out)?;
        Ok((outcome, String::from_utf8_lossy(&out).into_owned()))
    }

    #[test]
    fn test_builtin_command_detection() {
        let executor = CommandExecutor::new();

        for name in ["exit", "ls", "pwd", "cd", "clear", "help", "date", "whoami", "history", "mkdir"] {
            assert!(executor.is_builtin(name), "{} should be registered", name);
        }
        assert!(!executor.is_builtin("unknown"));
        assert!(!executor.is_builtin(""));
        assert!(!executor.is_builtin("LS"));
        assert_eq!(executor.names().count(), 10);
    }

    #[test]
    fn test_execute_unknown_command() {
        let executor = CommandExecutor::new();

        let result = run(&executor, "foobar", &[]);
        assert!(matches!(&result, Err(CommandError::NotFound(cmd)) if cmd == "foobar"));

        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("foobar"));
        assert!(message.contains("help"));
    }

    #[test]
    fn test_exit_ignores_arguments() {
        let executor = CommandExecutor::new();
        let (outcome, _) = run(&executor, "exit", &["now", "please"]).unwrap();
        assert_eq!(outcome, Outcome::Exit);
    }

    #[test]
    fn test_other_builtins_continue() {
        let executor = CommandExecutor::new();
        let (outcome, output) = run(&executor, "help", &[]).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert!(output.starts_with("Available commands:"));
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::NotFound("test".to_string()),
            CommandError::Usage("usage: mkdir <directory>".to_string()),
            CommandError::Execution("failed".to_string()),
            CommandError::os(
                "mkdir foo",
                std::io::Error::new(std::io::ErrorKind::AlreadyExists, "File exists"),
            ),
            CommandError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed")),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_os_error_names_context() {
        let err = CommandError::os(
            "mkdir foo",
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "File exists"),
        );
        assert_eq!(err.to_string(), "mkdir foo: File exists");
    }
}
