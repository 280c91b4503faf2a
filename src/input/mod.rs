mod completer;
mod editor;

pub use completer::ShellHelper;
pub use editor::EditorSource;

use crate::error::ShellError;

/// One result of asking the line editor for input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A full line as typed, not yet trimmed.
    Line(String),
    /// Ctrl-C; carries whatever had been typed so far.
    Interrupted(String),
    /// Ctrl-D or a closed input stream.
    Eof,
}

/// The line-editing collaborator the read-eval loop pulls input from.
pub trait LineSource {
    fn next_line(&mut self, prompt: &str) -> Result<LineEvent, ShellError>;

    /// Releases the editor and flushes anything it persists.
    fn close(&mut self) -> Result<(), ShellError> {
        Ok(())
    }
}
