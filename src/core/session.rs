use super::SessionHistory;
use std::path::{Path, PathBuf};

/// Mutable state owned by the dispatcher for one shell session.
#[derive(Debug, Default)]
pub struct Session {
    history: SessionHistory,
    previous_dir: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut SessionHistory {
        &mut self.history
    }

    /// The directory `cd -` returns to. An empty path counts as unset.
    pub fn previous_dir(&self) -> Option<&Path> {
        self.previous_dir
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// Only called once a directory change has succeeded.
    pub(crate) fn set_previous_dir(&mut self, dir: PathBuf) {
        self.previous_dir = Some(dir);
    }
}
