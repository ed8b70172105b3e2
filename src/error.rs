//! Error types for declutter
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, unknown group, invalid config)
//! - 3: Blocked by the access gate (sign-in required)
//! - 4: Operation failed (storage, network)

use thiserror::Error;

/// Exit codes for the declutter CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const GATE_BLOCKED: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for declutter operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    // Gate blocks (exit code 3)
    #[error("Sign in required before using the checklist")]
    SignInRequired,

    // Operation failures (exit code 4)
    #[error("Failed to sign in. Please try again.")]
    GateRejected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::InvalidConfig(_) | Error::InvalidArgument(_) | Error::UnknownGroup(_) => {
                exit_codes::USER_ERROR
            }

            // Gate blocks
            Error::SignInRequired => exit_codes::GATE_BLOCKED,

            // Operation failures
            Error::GateRejected
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_)
            | Error::OperationFailed(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for declutter operations
pub type Result<T> = std::result::Result<T, Error>;
