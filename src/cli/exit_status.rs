use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// A translate or revert run that got as far as processing files is a
/// success even when some files failed; those failures are in the report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// The command refused to act, e.g. `init` with an existing config.
    Failure,
    /// Fatal precondition: missing root, no source files, bad config or
    /// dictionary.
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
