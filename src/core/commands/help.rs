use super::{Command, CommandError, Outcome};
use crate::core::Session;
use std::io::Write;

/// Usage column and description for every built-in, in display order.
pub const CATALOGUE: &[(&str, &str)] = &[
    ("ls", "List directory contents"),
    ("cd [dir]", "Change directory"),
    ("pwd", "Print working directory"),
    ("clear", "Clean the terminal"),
    ("date ...", "Show date/time (sub: year|month|day|time)"),
    ("whoami", "Show current user name"),
    ("history", "Show command history"),
    ("mkdir <d>", "Create directory"),
    ("help", "Show this list"),
    ("exit", "Exit the shell"),
];

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(
        &self,
        _args: &[String],
        _session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        writeln!(out, "Available commands:")?;
        for (usage, description) in CATALOGUE {
            writeln!(out, "  {:<9} - {}", usage, description)?;
        }
        Ok(Outcome::Continue)
    }
}
