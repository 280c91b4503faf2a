use super::{Command, CommandError, Outcome};
use crate::core::Session;
use std::ffi::CStr;
use std::io::Write;

const INITIAL_BUF_LEN: usize = 1024;
const MAX_BUF_LEN: usize = 1 << 20;

#[derive(Clone)]
pub struct WhoamiCommand;

impl Default for WhoamiCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl WhoamiCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for WhoamiCommand {
    fn execute(
        &self,
        _args: &[String],
        _session: &mut Session,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        writeln!(out, "{}", current_username()?)?;
        Ok(Outcome::Continue)
    }
}

/// Looks up the real user id in the password database.
pub fn current_username() -> Result<String, CommandError> {
    let uid = unsafe { libc::getuid() };
    let mut buf: Vec<libc::c_char> = vec![0; INITIAL_BUF_LEN];

    loop {
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
        };

        if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 {
            return Err(CommandError::os(
                "user: lookup userid",
                std::io::Error::from_raw_os_error(rc),
            ));
        }
        if result.is_null() || pwd.pw_name.is_null() {
            return Err(CommandError::Execution(format!(
                "user: unknown userid {}",
                uid
            )));
        }

        // pw_name points into `buf`, which is still alive here.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}
