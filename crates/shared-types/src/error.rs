use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The component tree or config file was assembled incorrectly.
    /// Never recoverable at runtime.
    Configuration,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Configuration => write!(f, "Configuration"),
        }
    }
}

/// Structured application error shared by the UI crates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Configuration,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::configuration("AuthState missing");
        assert_eq!(err.to_string(), "Configuration: AuthState missing");
    }

    #[test]
    fn serializes_kind_by_name() {
        let json = serde_json::to_value(AppError::configuration("no provider")).unwrap();
        assert_eq!(json["kind"], "Configuration");
        assert_eq!(json["message"], "no provider");
    }
}
