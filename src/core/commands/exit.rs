use super::{Command, CommandError, Outcome};
use crate::core::Session;
use std::io::Write;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(
        &self,
        _args: &[String],
        _session: &mut Session,
        _out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit)
    }
}
