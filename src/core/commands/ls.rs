use super::{Command, CommandError, Outcome};
use crate::core::Session;
use std::fs;
use std::io::Write;

/// Prints the current directory's entries, one per line, in the order the
/// OS hands them back.
#[derive(Clone)]
pub struct LsCommand;

impl Default for LsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LsCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for LsCommand {
    fn execute(
        &self,
        _args: &[String],
        _session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let entries = fs::read_dir(".").map_err(|e| CommandError::os("open .", e))?;

        for entry in entries {
            let entry = entry.map_err(|e| CommandError::os("readdir .", e))?;
            writeln!(out, "{}", entry.file_name().to_string_lossy())?;
        }
        Ok(Outcome::Continue)
    }
}
