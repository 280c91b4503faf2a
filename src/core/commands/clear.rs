use super::{Command, CommandError, Outcome};
use crate::core::Session;
use std::io::Write;

/// Cursor home followed by erase-display.
pub const CLEAR_SEQUENCE: &str = "\x1b[H\x1b[2J";

#[derive(Clone)]
pub struct ClearCommand;

impl Default for ClearCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ClearCommand {
    fn execute(
        &self,
        _args: &[String],
        _session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        write!(out, "{}", CLEAR_SEQUENCE)?;
        out.flush()?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_emits_escape_sequence() {
        let mut session = Session::new();
        let mut out = Vec::new();

        ClearCommand::new().execute(&[], &mut session, &mut out).unwrap();

        assert_eq!(out, b"\x1b[H\x1b[2J");
    }
}
