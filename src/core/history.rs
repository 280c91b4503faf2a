/// Lines accepted during the current session, in arrival order.
///
/// Entries are never removed or rewritten, so the 1-based index shown by the
/// `history` built-in stays stable for the lifetime of the process. There is
/// no cap on growth.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<String>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callers pass an already trimmed, non-empty line.
    pub fn record(&mut self, line: &str) {
        self.entries.push(line.to_owned());
    }

    pub fn all(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_order() {
        let mut history = SessionHistory::new();
        history.record("pwd");
        history.record("cd /tmp");
        history.record("pwd");

        assert_eq!(history.all(), &["pwd", "cd /tmp", "pwd"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_all_does_not_consume() {
        let mut history = SessionHistory::new();
        history.record("ls");

        assert_eq!(history.all().len(), 1);
        assert_eq!(history.all().len(), 1);
        assert!(!history.is_empty());
    }
}
