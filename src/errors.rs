//! Error type for scenario loading, validation, and report output.
//!
//! The engine itself cannot fail; every error here comes from the boundary
//! around it.
//!
//! # Error Codes
//!
//! - E001-E009: I/O errors
//! - E020-E029: Configuration errors
//! - E050-E059: Validation errors
//! - E060-E069: Output errors
//!
//! # Example
//!
//! ```rust
//! use medipyxis_roi::errors::{ErrorCode, RoiError};
//!
//! let err = RoiError::out_of_range("practice.providers", 0.0, 1.0, 50.0);
//! assert_eq!(err.code(), ErrorCode::VALIDATION_RANGE);
//! assert!(err.is_user_fixable());
//! ```

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Config error - unparseable scenario file
    pub const CONFIG_PARSE: ErrorCode = ErrorCode("E020");
    /// Config error - malformed command-line override
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E021");
    /// Config error - explicit file not found
    pub const CONFIG_FILE_NOT_FOUND: ErrorCode = ErrorCode("E022");

    /// Validation error - value outside the control's range
    pub const VALIDATION_RANGE: ErrorCode = ErrorCode("E050");
    /// Validation error - negative or non-finite amount
    pub const VALIDATION_AMOUNT: ErrorCode = ErrorCode("E051");
    /// Validation error - fields that contradict each other
    pub const VALIDATION_CONSTRAINT: ErrorCode = ErrorCode("E052");

    /// Output error - serialization or write failure
    pub const OUTPUT_GENERIC: ErrorCode = ErrorCode("E060");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum RoiError {
    #[error("[{code}] {message}{}", path_suffix(.path))]
    Io {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("[{code}] {message}{}", path_suffix(.path))]
    Config {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },

    #[error("[{code}] {field}: {message}")]
    Validation {
        code: ErrorCode,
        field: String,
        message: String,
    },

    #[error("[{code}] {message}")]
    Output { code: ErrorCode, message: String },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl RoiError {
    pub fn io(message: impl Into<String>, path: Option<PathBuf>, source: std::io::Error) -> Self {
        let code = if source.kind() == std::io::ErrorKind::NotFound {
            ErrorCode::IO_FILE_NOT_FOUND
        } else {
            ErrorCode::IO_GENERIC
        };
        Self::Io {
            code,
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn config_parse(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_PARSE,
            message: message.into(),
            path,
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_INVALID,
            message: message.into(),
            path: None,
        }
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_FILE_NOT_FOUND,
            message: "scenario file not found".to_string(),
            path: Some(path.into()),
        }
    }

    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_RANGE,
            field: field.into(),
            message: format!("value {value} out of range (expected: {min}-{max})"),
        }
    }

    pub fn invalid_amount(field: impl Into<String>, value: f64) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_AMOUNT,
            field: field.into(),
            message: format!("amount {value} must be a finite, non-negative number"),
        }
    }

    pub fn constraint(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_CONSTRAINT,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            code: ErrorCode::OUTPUT_GENERIC,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { code, .. }
            | Self::Config { code, .. }
            | Self::Validation { code, .. }
            | Self::Output { code, .. } => *code,
        }
    }

    /// Whether editing the scenario or the flags can fix this error.
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Validation { .. })
    }
}

impl From<std::io::Error> for RoiError {
    fn from(err: std::io::Error) -> Self {
        RoiError::io(err.to_string(), None, err)
    }
}

impl From<serde_json::Error> for RoiError {
    fn from(err: serde_json::Error) -> Self {
        RoiError::output(format!("failed to serialize report: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, RoiError>;
