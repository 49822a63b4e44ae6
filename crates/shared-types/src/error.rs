use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// A control was configured with a variant name it does not know.
    UnknownVariant,
    /// A control that needs visible content was given none.
    MissingContent,
    /// A service endpoint is not an absolute http(s) URL.
    InvalidEndpoint,
    /// `config.toml` could not be read or parsed.
    ConfigParse,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::UnknownVariant => write!(f, "UnknownVariant"),
            AppErrorKind::MissingContent => write!(f, "MissingContent"),
            AppErrorKind::InvalidEndpoint => write!(f, "InvalidEndpoint"),
            AppErrorKind::ConfigParse => write!(f, "ConfigParse"),
        }
    }
}

/// Structured error shared by the controls, the app and its build script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn unknown_variant(value: &str) -> Self {
        Self {
            kind: AppErrorKind::UnknownVariant,
            message: format!("unknown variant `{value}` (expected `primary` or `secondary`)"),
        }
    }

    pub fn missing_content(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::MissingContent,
            message: message.into(),
        }
    }

    pub fn invalid_endpoint(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidEndpoint,
            message: message.into(),
        }
    }

    pub fn config_parse(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ConfigParse,
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
