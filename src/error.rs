//! Error types.
//!
//! - `GrowthError` is the library's error taxonomy. Every core operation
//!   returns `Result<T, GrowthError>` and fails synchronously at the point of
//!   the offending call.
//! - `AppError` is what the `growth` binary reports: a message plus a process
//!   exit code.

use thiserror::Error;

/// Core error taxonomy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    /// A required input was absent before any computation started.
    #[error("missing required input: {0}")]
    Validation(&'static str),

    /// Decimal age fell outside the supported `[0, 18]` year window.
    #[error("age {age:.3} years is outside the supported range 0-18")]
    AgeOutOfRange { age: f64 },

    /// A non-positive or non-finite measurement was passed to the forward transform.
    #[error("invalid measurement value {value}: must be finite and greater than zero")]
    InvalidValue { value: f64 },

    /// The (sex, metric) combination has no configured reference table.
    #[error("no reference table for sex `{sex}` and metric `{metric}`")]
    UnknownTable { sex: String, metric: String },

    /// Deletion of a record that does not exist.
    #[error("measurement index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Age is NaN or infinite.
    #[error("invalid age {0}: must be finite")]
    InvalidAge(f64),

    /// The power transform has no real solution at this SD level and age.
    #[error("SD level {sd} has no finite value in the reference model at age {age:.2}")]
    OutOfModelRange { sd: f64, age: f64 },

    /// Reference data violates a table invariant.
    #[error("invalid reference table: {0}")]
    InvalidTable(String),

    /// Curve sampling grid is empty or malformed.
    #[error("invalid curve grid: {0}")]
    InvalidGrid(String),
}

pub type Result<T> = std::result::Result<T, GrowthError>;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<GrowthError> for AppError {
    fn from(err: GrowthError) -> Self {
        AppError::new(3, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
