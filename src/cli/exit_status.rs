use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): Scan completed, no missing dependencies found
/// - `Failure` (1): Scan completed, at least one missing dependency found
/// - `Error` (2): The run failed (bad scan root, unwritable report, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed, no missing dependencies found.
    Success,
    /// Scan completed, at least one missing dependency found.
    Failure,
    /// The run failed before a report could be produced.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
