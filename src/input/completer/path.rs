use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes a partially typed path relative to the working directory.
#[derive(Clone, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix) = split_incomplete(incomplete);

        let Ok(entries) = fs::read_dir(dir.as_deref().unwrap_or(Path::new("."))) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                if !name.starts_with(prefix) {
                    return None;
                }
                let shown = match &dir {
                    Some(dir) => dir.join(&name).to_string_lossy().into_owned(),
                    None => name,
                };
                Some(completion_pair(shown, entry.path().is_dir()))
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits `incomplete` into the directory to list (`None` for the working
/// directory) and the file-name prefix to match within it.
fn split_incomplete(incomplete: &str) -> (Option<PathBuf>, &str) {
    if incomplete.is_empty() {
        return (None, "");
    }
    if incomplete.ends_with('/') {
        return (Some(PathBuf::from(incomplete)), "");
    }

    match incomplete.rfind('/') {
        Some(0) => (Some(PathBuf::from("/")), &incomplete[1..]),
        Some(idx) => (
            Some(PathBuf::from(&incomplete[..idx])),
            &incomplete[idx + 1..],
        ),
        None => (None, incomplete),
    }
}

fn completion_pair(path: String, is_dir: bool) -> Pair {
    if is_dir {
        let shown = format!("{}/", path);
        Pair {
            display: shown.clone(),
            replacement: shown,
        }
    } else {
        Pair {
            replacement: format!("{} ", path),
            display: path,
        }
    }
}
