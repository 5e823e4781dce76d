use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for CLI tools.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but the request could not be satisfied
///   (nothing found, action refused or failed)
/// - `Error` (2): Command failed due to internal error (config error, state
///   I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but the request could not be satisfied.
    Failure,
    /// Command failed due to internal error.
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
