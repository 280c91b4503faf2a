use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rustyline::{
    error::ReadlineError, history::FileHistory, Cmd, ConditionalEventHandler, Config, Editor,
    Event, EventContext, EventHandler, KeyEvent, RepeatCount,
};

use super::{LineEvent, LineSource, ShellHelper};
use crate::error::ShellError;

/// Remembers the buffer contents at the moment Ctrl-C was pressed, so the
/// loop can tell an interrupted empty line from a discarded partial one.
#[derive(Clone, Default)]
struct InterruptCapture {
    partial: Arc<Mutex<String>>,
}

impl InterruptCapture {
    fn take(&self) -> String {
        self.partial
            .lock()
            .map(|mut partial| std::mem::take(&mut *partial))
            .unwrap_or_default()
    }
}

impl ConditionalEventHandler for InterruptCapture {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext,
    ) -> Option<Cmd> {
        if let Ok(mut partial) = self.partial.lock() {
            partial.clear();
            partial.push_str(ctx.line());
        }
        Some(Cmd::Interrupt)
    }
}

/// Line source backed by a rustyline editor with an optional history file.
pub struct EditorSource {
    editor: Editor<ShellHelper, FileHistory>,
    history_file: Option<PathBuf>,
    interrupt: InterruptCapture,
}

impl EditorSource {
    pub fn new(helper: ShellHelper, history_file: Option<PathBuf>) -> Result<Self, ShellError> {
        let config = Config::builder().auto_add_history(true).build();
        let mut editor = Editor::<ShellHelper, FileHistory>::with_config(config)?;
        editor.set_helper(Some(helper));

        let interrupt = InterruptCapture::default();
        editor.bind_sequence(
            KeyEvent::ctrl('C'),
            EventHandler::Conditional(Box::new(interrupt.clone())),
        );

        if let Some(path) = &history_file {
            match editor.load_history(path) {
                Ok(()) => log::debug!("loaded line history from {}", path.display()),
                Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("no line history at {} yet", path.display())
                }
                Err(e) => log::warn!("could not load {}: {}", path.display(), e),
            }
        }

        Ok(Self {
            editor,
            history_file,
            interrupt,
        })
    }
}

impl LineSource for EditorSource {
    fn next_line(&mut self, prompt: &str) -> Result<LineEvent, ShellError> {
        self.interrupt.take();

        match self.editor.readline(prompt) {
            Ok(line) => Ok(LineEvent::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(LineEvent::Interrupted(self.interrupt.take())),
            Err(ReadlineError::Eof) => Ok(LineEvent::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn close(&mut self) -> Result<(), ShellError> {
        if let Some(path) = &self.history_file {
            self.editor.save_history(path)?;
            log::debug!("saved line history to {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_capture_take_clears() {
        let capture = InterruptCapture::default();
        if let Ok(mut partial) = capture.partial.lock() {
            partial.push_str("ls -");
        }

        assert_eq!(capture.take(), "ls -");
        assert_eq!(capture.take(), "");
    }

    #[test]
    fn test_capture_is_shared_between_clones() {
        let capture = InterruptCapture::default();
        let bound = capture.clone();
        if let Ok(mut partial) = bound.partial.lock() {
            partial.push_str("pwd");
        }

        assert_eq!(capture.take(), "pwd");
    }
}
