use super::{Command, CommandError, Outcome};
use crate::core::Session;
use std::fs::DirBuilder;
use std::io::Write;
use std::os::unix::fs::DirBuilderExt;

/// rwxr-xr-x, before the process umask is applied.
pub const DIR_MODE: u32 = 0o755;

#[derive(Clone)]
pub struct MkdirCommand;

impl Default for MkdirCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn execute(
        &self,
        args: &[String],
        _session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let path = args
            .first()
            .ok_or_else(|| CommandError::Usage("usage: mkdir <directory>".to_string()))?;

        DirBuilder::new()
            .mode(DIR_MODE)
            .create(path)
            .map_err(|e| CommandError::os(format!("mkdir {}", path), e))?;

        writeln!(out, "Directory created: {}", path)?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    fn mkdir(args: &[String]) -> (Result<Outcome, CommandError>, String) {
        let mut session = Session::new();
        let mut out = Vec::new();
        let result = MkdirCommand::new().execute(args, &mut session, &mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_mkdir_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fresh");
        let target_str = target.to_str().unwrap().to_string();

        let (result, output) = mkdir(&[target_str.clone()]);

        assert!(result.is_ok());
        assert!(target.is_dir());
        assert_eq!(output, format!("Directory created: {}\n", target_str));
    }

    #[test]
    fn test_mkdir_mode_is_bounded_by_0755() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("perm");
        mkdir(&[target.to_str().unwrap().to_string()]).0.unwrap();

        let mode = std::fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & !DIR_MODE, 0);
        assert_eq!(mode & 0o700, 0o700);
    }

    #[test]
    fn test_mkdir_without_argument() {
        let (result, output) = mkdir(&[]);
        assert!(matches!(result, Err(CommandError::Usage(msg)) if msg == "usage: mkdir <directory>"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_mkdir_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().to_str().unwrap().to_string();

        let (result, output) = mkdir(&[existing]);

        match result {
            Err(CommandError::Os { source, context }) => {
                assert_eq!(source.kind(), ErrorKind::AlreadyExists);
                assert!(context.starts_with("mkdir "));
            }
            other => panic!("expected OS error, got {:?}", other),
        }
        assert!(output.is_empty());
    }

    #[test]
    fn test_mkdir_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no/such/parent");

        let (result, _) = mkdir(&[target.to_str().unwrap().to_string()]);

        assert!(matches!(result, Err(CommandError::Os { source, .. }) if source.kind() == ErrorKind::NotFound));
        assert!(!target.exists());
    }
}
