use std::io::Write;

use super::Shell;
use crate::core::commands::{CommandError, Outcome};
use crate::input::LineSource;

/// A command line split into its name and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub name: &'a str,
    pub args: Vec<String>,
}

impl<'a> ParsedCommand<'a> {
    /// Splits on runs of whitespace. Returns `None` for a blank line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        Some(ParsedCommand {
            name,
            args: tokens.map(String::from).collect(),
        })
    }
}

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<Outcome, CommandError>;
}

impl<S, O, E> CommandHandler for Shell<S, O, E>
where
    S: LineSource,
    O: Write,
    E: Write,
{
    fn execute_command(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let line = line.trim();
        let Some(parsed) = ParsedCommand::parse(line) else {
            return Ok(Outcome::Continue);
        };

        self.session.history_mut().record(line);

        let result = self
            .executor
            .execute(parsed.name, &parsed.args, &mut self.session, &mut self.out);
        self.out.flush()?;
        result
    }
}
