use std::io::{self, Stderr, Stdout, Write};

mod executor;

use crate::{
    config::Config,
    core::{
        commands::{CommandExecutor, Outcome},
        Session,
    },
    error::ShellError,
    input::{EditorSource, LineEvent, LineSource, ShellHelper},
};

use executor::CommandHandler;
pub use executor::ParsedCommand;

pub const FAREWELL_EXIT: &str = "Exiting the shell";
pub const FAREWELL_EOF: &str = "bye";

/// Read failures in a row after which input is treated as closed.
pub const MAX_CONSECUTIVE_READ_ERRORS: usize = 5;

/// The read-eval loop: pulls lines from a [`LineSource`], dispatches them to
/// the built-ins and reports results on `out` and failures on `err`.
pub struct Shell<S, O = Stdout, E = Stderr> {
    pub(crate) source: S,
    pub(crate) session: Session,
    pub(crate) executor: CommandExecutor,
    pub(crate) config: Config,
    pub(crate) out: O,
    pub(crate) err: E,
}

impl Shell<EditorSource> {
    /// Sets up the interactive editor. Failure here is the only fatal error.
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let executor = CommandExecutor::new();
        let helper = ShellHelper::new(executor.names());
        let source = EditorSource::new(helper, config.history_file.clone())?;

        Ok(Shell {
            source,
            session: Session::new(),
            executor,
            config,
            out: io::stdout(),
            err: io::stderr(),
        })
    }
}

impl<S, O, E> Shell<S, O, E>
where
    S: LineSource,
    O: Write,
    E: Write,
{
    pub fn with_io(source: S, config: Config, out: O, err: E) -> Self {
        Shell {
            source,
            session: Session::new(),
            executor: CommandExecutor::new(),
            config,
            out,
            err,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `exit` or end of input, then closes the line source.
    /// The source is closed on every exit path, including output failures.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let result = self.read_eval();

        if let Err(e) = self.source.close() {
            log::warn!("failed to close line editor: {}", e);
        }
        result
    }

    fn read_eval(&mut self) -> Result<(), ShellError> {
        let mut read_errors = 0;

        loop {
            let event = match self.source.next_line(&self.config.prompt) {
                Ok(event) => {
                    read_errors = 0;
                    event
                }
                Err(e) => {
                    writeln!(self.err, "{}", e)?;
                    self.err.flush()?;
                    read_errors += 1;
                    if read_errors < MAX_CONSECUTIVE_READ_ERRORS {
                        continue;
                    }
                    log::warn!("giving up after {} consecutive read errors", read_errors);
                    LineEvent::Eof
                }
            };

            match event {
                LineEvent::Interrupted(partial) => {
                    log::debug!("interrupted with {} byte(s) pending", partial.len());
                    if !partial.is_empty() {
                        write!(self.out, "\r")?;
                        self.out.flush()?;
                    }
                }
                LineEvent::Eof => return self.farewell(FAREWELL_EOF),
                LineEvent::Line(line) => match self.execute_command(&line) {
                    Ok(Outcome::Continue) => {}
                    Ok(Outcome::Exit) => return self.farewell(FAREWELL_EXIT),
                    Err(e) => {
                        writeln!(self.err, "{}", e)?;
                        self.err.flush()?;
                    }
                },
            }
        }
    }

    fn farewell(&mut self, message: &str) -> Result<(), ShellError> {
        if !self.config.quiet {
            writeln!(self.out, "{}", message)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
