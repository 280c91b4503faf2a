use super::{Command, CommandError, Outcome};
use crate::core::Session;
use chrono::{DateTime, Datelike, FixedOffset, Utc};
use std::io::Write;

/// UTC+05:30.
pub const ZONE_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;
pub const ZONE_LABEL: &str = "IST";

const USAGE: &str = "usage: date [year|month|day|time]";

/// Prints the current time in a fixed reference zone, never the process's
/// local zone.
#[derive(Clone)]
pub struct DateCommand {
    offset_secs: i32,
    label: &'static str,
}

impl Default for DateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl DateCommand {
    pub fn new() -> Self {
        Self {
            offset_secs: ZONE_OFFSET_SECS,
            label: ZONE_LABEL,
        }
    }

    fn zone(&self) -> Result<FixedOffset, CommandError> {
        FixedOffset::east_opt(self.offset_secs).ok_or_else(|| {
            CommandError::Execution(format!("invalid time zone offset {}s", self.offset_secs))
        })
    }

    pub fn now(&self) -> Result<DateTime<FixedOffset>, CommandError> {
        Ok(Utc::now().with_timezone(&self.zone()?))
    }

    /// Formats `now` for the optional field selector. Extra arguments past
    /// the first are ignored.
    pub fn render(&self, now: &DateTime<FixedOffset>, field: Option<&str>) -> Result<String, CommandError> {
        match field {
            None => Ok(format!(
                "{} {} {}",
                now.format("%a %b %d %H:%M:%S"),
                self.label,
                now.format("%Y")
            )),
            Some("year") => Ok(now.year().to_string()),
            Some("month") => Ok(now.format("%B").to_string()),
            Some("day") => Ok(now.day().to_string()),
            Some("time") => Ok(now.format("%H:%M:%S").to_string()),
            Some(_) => Err(CommandError::Usage(USAGE.to_string())),
        }
    }
}

impl Command for DateCommand {
    fn execute(
        &self,
        args: &[String],
        _session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let now = self.now()?;
        let text = self.render(&now, args.first().map(String::as_str))?;
        writeln!(out, "{}", text)?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<FixedOffset> {
        // 2024-03-05 22:40:09 UTC is 2024-03-06 04:10:09 at +05:30.
        Utc.with_ymd_and_hms(2024, 3, 5, 22, 40, 9)
            .unwrap()
            .with_timezone(&FixedOffset::east_opt(ZONE_OFFSET_SECS).unwrap())
    }

    #[test]
    fn test_full_timestamp_layout() {
        let cmd = DateCommand::new();
        let text = cmd.render(&fixed_instant(), None).unwrap();
        assert_eq!(text, "Wed Mar 06 04:10:09 IST 2024");
    }

    #[test]
    fn test_single_fields() {
        let cmd = DateCommand::new();
        let now = fixed_instant();

        assert_eq!(cmd.render(&now, Some("year")).unwrap(), "2024");
        assert_eq!(cmd.render(&now, Some("month")).unwrap(), "March");
        assert_eq!(cmd.render(&now, Some("day")).unwrap(), "6");
        assert_eq!(cmd.render(&now, Some("time")).unwrap(), "04:10:09");
    }

    #[test]
    fn test_unknown_field_is_usage_error() {
        let cmd = DateCommand::new();
        let result = cmd.render(&fixed_instant(), Some("bogus"));
        assert!(matches!(result, Err(CommandError::Usage(msg)) if msg == USAGE));
    }

    #[test]
    fn test_now_uses_fixed_offset() {
        let now = DateCommand::new().now().unwrap();
        assert_eq!(now.offset().local_minus_utc(), ZONE_OFFSET_SECS);
    }

    #[test]
    fn test_execute_prints_one_line() {
        let mut session = Session::new();
        let mut out = Vec::new();

        DateCommand::new()
            .execute(&["year".to_string()], &mut session, &mut out)
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 1);
        assert_eq!(printed.trim_end().len(), 4);
        assert!(printed.trim_end().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_execute_bogus_writes_nothing() {
        let mut session = Session::new();
        let mut out = Vec::new();

        let result = DateCommand::new().execute(&["bogus".to_string()], &mut session, &mut out);

        assert!(matches!(result, Err(CommandError::Usage(_))));
        assert!(out.is_empty());
    }
}
