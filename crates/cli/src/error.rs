//! CLI exit codes.
//!
//! Invariants:
//! - Every failure, whether an unknown action or a load error, exits with 1.
//! - Argument syntax errors keep clap's own exit code (2).

/// Process exit codes for `configctl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Any failure surfaced by the command.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&anyhow::Error> for ExitCode {
    fn from(_: &anyhow::Error) -> Self {
        ExitCode::GeneralError
    }
}
