//! One-line status messages for CLI feedback.

use std::fmt;

use crate::favorites::WriteStatus;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Notice,
    Failure,
}

impl StatusLevel {
    fn prefix(self) -> &'static str {
        match self {
            StatusLevel::Success => "Success:",
            StatusLevel::Notice => "Note:",
            StatusLevel::Failure => "Error:",
        }
    }
}

/// A message with a severity prefix.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Success,
        }
    }

    pub fn notice(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Notice,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Failure,
        }
    }

    /// Picks the level from a favorites write: written is a success,
    /// unchanged a notice, failed a failure.
    pub fn for_write(status: WriteStatus, message: String) -> Self {
        match status {
            WriteStatus::Written => Self::success(message),
            WriteStatus::Unchanged => Self::notice(message),
            WriteStatus::Failed => Self::failure(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level != StatusLevel::Failure
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.level.prefix(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Imported 2 favorites".to_string());
        assert_eq!(success.to_string(), "Success: Imported 2 favorites\n");

        let failure = OperationStatus::failure("Favorites not saved".to_string());
        assert!(format!("{failure}").starts_with("Error:"));
        assert!(!failure.is_success());
    }

    #[test]
    fn test_for_write_levels() {
        let unchanged = OperationStatus::for_write(WriteStatus::Unchanged, "x".to_string());
        assert_eq!(unchanged.level, StatusLevel::Notice);
        assert!(unchanged.is_success());

        let failed = OperationStatus::for_write(WriteStatus::Failed, "x".to_string());
        assert_eq!(failed.level, StatusLevel::Failure);
    }
}
