//! Helpers for reporting child process results.

use std::process::{ExitStatus, Output};

/// Exit code or terminating signal, for error messages.
pub(crate) fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => status.to_string(),
    }
}

/// Tool diagnostics: stderr verbatim, or stdout when stderr is blank.
pub(crate) fn diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).into_owned()
    } else {
        stderr.into_owned()
    }
}
