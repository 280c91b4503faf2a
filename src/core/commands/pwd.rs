use super::{Command, CommandError, Outcome};
use crate::core::Session;
use std::env;
use std::io::Write;

#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(
        &self,
        _args: &[String],
        _session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let cwd = env::current_dir().map_err(|e| CommandError::os("getwd", e))?;
        writeln!(out, "{}", cwd.display())?;
        Ok(Outcome::Continue)
    }
}
