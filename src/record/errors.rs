//! Record codec error types
//!
//! Error codes:
//! - PL_MALFORMED_INPUT (rejected request)
//! - PL_SERIALIZATION_FAILED (internal encode fault)

use std::fmt;

/// Record-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordErrorCode {
    /// Input is not JSON, not an object, or a known field has the wrong type
    PlMalformedInput,
    /// Encoding a record back to JSON failed
    PlSerializationFailed,
}

impl RecordErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            RecordErrorCode::PlMalformedInput => "PL_MALFORMED_INPUT",
            RecordErrorCode::PlSerializationFailed => "PL_SERIALIZATION_FAILED",
        }
    }
}

impl fmt::Display for RecordErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Record codec error with the offending field, when one is known
#[derive(Debug)]
pub struct RecordError {
    code: RecordErrorCode,
    message: String,
    field: Option<String>,
}

impl RecordError {
    /// Input could not be parsed as a JSON object
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self {
            code: RecordErrorCode::PlMalformedInput,
            message: reason.into(),
            field: None,
        }
    }

    /// A known field is present with the wrong JSON type
    pub fn type_mismatch(field: &str, expected: &str, actual: &str) -> Self {
        Self {
            code: RecordErrorCode::PlMalformedInput,
            message: format!(
                "field '{}' must be {}, found {}",
                field, expected, actual
            ),
            field: Some(field.to_string()),
        }
    }

    /// A known nested field does not have the required shape
    pub fn invalid_shape(field: &str, reason: impl fmt::Display) -> Self {
        Self {
            code: RecordErrorCode::PlMalformedInput,
            message: format!("field '{}' is malformed: {}", field, reason),
            field: Some(field.to_string()),
        }
    }

    /// Encoding failed
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self {
            code: RecordErrorCode::PlSerializationFailed,
            message: reason.into(),
            field: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> RecordErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the JSON name of the offending field
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns whether the caller's input was at fault
    pub fn is_malformed_input(&self) -> bool {
        self.code == RecordErrorCode::PlMalformedInput
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for RecordError {}

/// Result type for record codec operations
pub type RecordResult<T> = Result<T, RecordError>;
