// src/exit.rs
//! Standardized process exit codes for `portstat`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::PortstatError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PortstatExit {
    /// Summary printed successfully.
    Success = 0,
    /// Generic error.
    Error = 1,
    /// An external tool could not be found or launched.
    ToolLaunch = 2,
    /// The statistics report was malformed or missing a required language.
    BadReport = 3,
}

impl PortstatExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for PortstatExit {
    fn report(self) -> std::process::ExitCode {
        // Codes stay in the 0..=255 range unix exposes to callers.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&PortstatError> for PortstatExit {
    fn from(e: &PortstatError) -> Self {
        match e {
            PortstatError::ToolLaunch { .. } => Self::ToolLaunch,
            PortstatError::MalformedReport(_) | PortstatError::MissingLanguage(_) => {
                Self::BadReport
            }
            PortstatError::Encode(_) => Self::Error,
        }
    }
}
