use super::{Command, CommandError, Outcome};
use crate::core::Session;
use std::env;
use std::io::Write;
use std::path::PathBuf;

/// Changes the working directory and remembers the one it left.
///
/// The target is resolved first (`~` and no argument mean the home
/// directory, `-` means the previous directory), then the current directory
/// is captured, then the change is attempted. The session's previous
/// directory is only overwritten after the change has succeeded.
#[derive(Clone)]
pub struct CdCommand {
    home_dir: fn() -> Option<PathBuf>,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            home_dir: dirs::home_dir,
        }
    }

    pub fn with_home_resolver(home_dir: fn() -> Option<PathBuf>) -> Self {
        Self { home_dir }
    }

    fn home(&self) -> Result<PathBuf, CommandError> {
        (self.home_dir)()
            .ok_or_else(|| CommandError::Execution("failed to get home directory".to_string()))
    }

    fn resolve_target(&self, args: &[String], session: &Session) -> Result<PathBuf, CommandError> {
        match args.first().map(String::as_str) {
            None | Some("~") => self.home(),
            Some("-") => session
                .previous_dir()
                .map(PathBuf::from)
                .ok_or_else(|| CommandError::Execution("no previous directory set".to_string())),
            Some(path) => Ok(PathBuf::from(path)),
        }
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        session: &mut Session,
        _out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let target = self.resolve_target(args, session)?;

        let current = env::current_dir()
            .map_err(|e| CommandError::os("failed to get current directory", e))?;

        env::set_current_dir(&target).map_err(|e| {
            CommandError::os(
                format!("failed to change directory to {}", target.display()),
                e,
            )
        })?;

        log::debug!("cd {} -> {}", current.display(), target.display());
        session.set_previous_dir(current);
        Ok(Outcome::Continue)
    }
}
