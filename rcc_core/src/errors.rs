//! # Error Types
//!
//! Structured error types for rcc_core. Rule violations are *not* errors: a
//! member that fails a code provision produces a failing
//! [`CheckResult`](crate::checks::CheckResult). A `CalcError` means a check
//! could not be evaluated at all (bad input, a zero divisor, a missing table
//! row) or that an outer surface (file, parser) failed.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_cover(cover_mm: f64) -> CalcResult<()> {
//!     if cover_mm < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "cover",
//!             cover_mm.to_string(),
//!             "Cover cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_cover(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rcc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for compliance evaluation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is outside its closed set, negative, or inconsistent
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Arithmetic could not be carried out (zero divisor, zero bar count, ...)
    #[error("Computation failed: {calculation} - {reason}")]
    ComputationFailure {
        calculation: String,
        reason: String,
    },

    /// A code table has no row for the requested key
    #[error("No entry in {table} for {key}")]
    LookupMiss { table: String, key: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or parse error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Saved outcome schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ComputationFailure error
    pub fn computation_failure(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ComputationFailure {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Create a LookupMiss error
    pub fn lookup_miss(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::LookupMiss {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ComputationFailure { .. } => "COMPUTATION_FAILURE",
            CalcError::LookupMiss { .. } => "LOOKUP_MISS",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

/// Guard a divisor, returning a ComputationFailure when it is zero or not finite.
pub(crate) fn nonzero(calculation: &str, name: &str, value: f64) -> CalcResult<f64> {
    if value == 0.0 || !value.is_finite() {
        return Err(CalcError::computation_failure(
            calculation,
            format!("{} must be non-zero (got {})", name, value),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("cover", "-5", "Cover cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::lookup_miss("tc_max", "M90").error_code(), "LOOKUP_MISS");
        assert_eq!(
            CalcError::computation_failure("moment capacity", "zero width").error_code(),
            "COMPUTATION_FAILURE"
        );
    }

    #[test]
    fn test_nonzero_guard() {
        assert_eq!(nonzero("spacing", "bar count", 4.0).unwrap(), 4.0);
        let err = nonzero("spacing", "bar count", 0.0).unwrap_err();
        assert!(err.to_string().contains("bar count must be non-zero"));
        assert!(nonzero("ratio", "span", f64::NAN).is_err());
    }
}
