//! Navigation errors.

use std::path::PathBuf;

use thiserror::Error;
use vitrine_core::CoreError;

use crate::navigation::ValidationIssue;

/// Navigation and catalog errors.
#[derive(Debug, Error)]
pub enum NavError {
    /// Error from the core library, including collection fetch failures.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The navigation singleton could not be parsed.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// No navigation singleton exists yet.
    #[error("navigation singleton not found in {0}")]
    MissingSingleton(PathBuf),

    /// The navigation singleton failed validation.
    #[error("invalid navigation document: {}", join_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

/// Result type for navigation operations.
pub type Result<T> = std::result::Result<T, NavError>;

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_lists_every_issue() {
        let err = NavError::Invalid(vec![
            ValidationIssue::EmptyName,
            ValidationIssue::SlugNotSafe("Main Menu".to_string()),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("name must not be empty"));
        assert!(msg.contains("Main Menu"));
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: NavError = CoreError::fetch("pages", "boom").into();
        assert_eq!(err.to_string(), "Failed to fetch collection `pages`: boom");
    }
}
