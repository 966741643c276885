//! Error types for Calcpad

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid digit: {0}")]
    InvalidDigit(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CalcError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::Config(_) => 1,
            CalcError::InvalidDigit(_) => 3,
            CalcError::InvalidInput(_) => 3,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid duration for {field}: {source}")]
    InvalidDuration {
        field: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("Could not determine the config directory; set CALCPAD_CONFIG")]
    NoConfigDir,
}
