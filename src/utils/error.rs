use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Validation error: {field} {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("{field} must not be null")]
    NullArgument { field: String },

    #[error("Student faculty mismatch: expected {expected}, got {actual}")]
    FacultyMismatch { expected: String, actual: String },

    #[error("Student id already exists: {id}")]
    DuplicateId { id: i64 },

    #[error("Student with id={id} not found")]
    StudentNotFound { id: i64 },

    #[error("Empty input")]
    EmptyInput,

    #[error("Invalid id format: {input:?}")]
    InvalidIdFormat {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl RosterError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit code used by the CLI for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            RosterError::EmptyInput => 2,
            RosterError::InvalidIdFormat { .. } => 3,
            RosterError::StudentNotFound { .. } => 4,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::EmptyInput => "Empty input. Please enter a number id.".to_string(),
            RosterError::InvalidIdFormat { .. } => {
                "Invalid id format. Please enter a number.".to_string()
            }
            RosterError::IoError(e) => format!("Could not read input: {}", e),
            RosterError::TomlError(e) => format!("Roster file is not valid TOML: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
