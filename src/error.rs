use miette::Diagnostic;
use thiserror::Error;

use crate::utils::time::UnresolvedZone;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Transport error: {0}")]
    #[diagnostic(
        code(staffo::transport),
        help("check the hostname in your configuration and your network connection")
    )]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    #[diagnostic(code(staffo::decode_failed))]
    DecodeFailed(String),

    #[error("Unexpected response shape: {0}")]
    #[diagnostic(code(staffo::unexpected_shape))]
    UnexpectedShape(String),

    #[error(transparent)]
    #[diagnostic(code(staffo::time_zone))]
    TimeZone(#[from] UnresolvedZone),

    #[error("Invalid date range: {start} is after {end}")]
    #[diagnostic(code(staffo::date_range))]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Environment error: {0}")]
    #[diagnostic(code(staffo::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(staffo::config),
        help("provide config.toml or the STAFFO_* environment variables")
    )]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(staffo::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(staffo::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(staffo::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Transport(format!("invalid request URL: {}", err))
    }
}

/// Type alias for Result with our Error type
pub type StaffoResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid value for environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create decode errors
pub fn decode_error(message: &str) -> Error {
    Error::DecodeFailed(message.to_string())
}

/// Helper to create shape errors
pub fn shape_error(message: &str) -> Error {
    Error::UnexpectedShape(message.to_string())
}
