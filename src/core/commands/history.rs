use super::{Command, CommandError, Outcome};
use crate::core::Session;
use std::io::Write;

#[derive(Clone)]
pub struct HistoryCommand;

impl Default for HistoryCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HistoryCommand {
    fn execute(
        &self,
        _args: &[String],
        session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        for (i, entry) in session.history().all().iter().enumerate() {
            writeln!(out, "{:>3} {}", i + 1, entry)?;
        }
        Ok(Outcome::Continue)
    }
}
