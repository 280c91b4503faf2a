use crate::flags::Flags;
use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "vshell> ";
pub const HISTORY_FILE_NAME: &str = ".vshell_history";

/// Settings resolved once at startup from the command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    /// Where the line editor persists raw input lines. `None` disables it.
    pub history_file: Option<PathBuf>,
    pub quiet: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            history_file: default_history_file(),
            quiet: false,
            debug: false,
        }
    }
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Self {
        let history_file = if flags.is_set("no-history-file") {
            None
        } else if let Some(path) = flags.get_value("history-file") {
            Some(PathBuf::from(path))
        } else {
            default_history_file()
        };

        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            history_file,
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
        }
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

fn default_history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(list: &[&str]) -> Flags {
        let mut flags = Flags::new();
        let args: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        flags.parse(&args).unwrap();
        flags
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_flags(&Flags::new());
        assert_eq!(config.prompt, "vshell> ");
        assert!(!config.quiet);
        assert_eq!(config.log_filter(), log::LevelFilter::Warn);
        if let Some(path) = config.history_file {
            assert!(path.ends_with(HISTORY_FILE_NAME));
        }
    }

    #[test]
    fn test_history_file_override() {
        let config = Config::from_flags(&parsed(&["-H", "/tmp/elsewhere"]));
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/elsewhere")));
    }

    #[test]
    fn test_no_history_file_wins() {
        let config = Config::from_flags(&parsed(&["-H", "/tmp/elsewhere", "-n"]));
        assert_eq!(config.history_file, None);
    }

    #[test]
    fn test_debug_raises_log_level() {
        let config = Config::from_flags(&parsed(&["--debug", "--quiet"]));
        assert!(config.quiet);
        assert_eq!(config.log_filter(), log::LevelFilter::Debug);
    }
}
