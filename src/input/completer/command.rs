use std::collections::BTreeSet;

use rustyline::completion::Pair;

/// Completes the first word of a line against the built-in names.
#[derive(Clone, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<&'static str>,
}

impl CommandCompleter {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            commands: names.into_iter().collect(),
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    pub fn complete_command(&self, line: &str) -> Vec<Pair> {
        let input = line.trim();

        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
