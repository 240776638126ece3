//! Error types for datahub

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datahub
#[derive(Debug, Error)]
pub enum DataHubError {
    #[error("User already exists")]
    DuplicateUser(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entry {0} belongs to another user")]
    Forbidden(String),

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Not a datahub directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DataHubError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DataHubError::NotInitialized(_) => 2,
            DataHubError::InvalidCredentials | DataHubError::NotAuthenticated => 3,
            DataHubError::DuplicateUser(_) | DataHubError::UserNotFound(_) => 4,
            DataHubError::Validation(_) => 5,
            DataHubError::Forbidden(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DataHubError::NotInitialized(path) => {
                format!(
                    "Not a datahub directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'datahub init' in this directory to create a new store\n\
                    • Navigate to an existing datahub directory\n\
                    • Set DATAHUB_ROOT environment variable to your store path",
                    path.display()
                )
            }
            DataHubError::NotAuthenticated => "Not signed in\n\n\
                Suggestions:\n\
                • Sign in with 'datahub login <EMAIL> <PASSWORD>'\n\
                • Create an account first with 'datahub register <EMAIL> <PASSWORD>'"
                .to_string(),
            DataHubError::InvalidCredentials => "Invalid email or password\n\n\
                Suggestions:\n\
                • Emails are case-sensitive\n\
                • Reset a forgotten password with 'datahub reset-password <EMAIL> <NEW_PASSWORD>'"
                .to_string(),
            DataHubError::DuplicateUser(email) => {
                format!(
                    "User already exists: {}\n\n\
                    Suggestions:\n\
                    • Sign in with 'datahub login {} <PASSWORD>'",
                    email, email
                )
            }
            DataHubError::Config(msg) if msg.contains("Unknown config key") => {
                format!(
                    "{}\n\n\
                    Valid keys: latency_ms, enforce_ownership\n\
                    Example: datahub config latency_ms 500",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DataHubError
pub type Result<T> = std::result::Result<T, DataHubError>;
