//! Domain error model.
//!
//! Every error kind carries a fixed [`ExceptionCode`] so callers can match on the
//! code regardless of the message text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Stable discriminant of an error kind.
///
/// Serializes as the string returned by [`ExceptionCode::as_str`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExceptionCode {
    ArgumentNotProvided,
    ArgumentInvalid,
    ArgumentOutOfRange,
    InvariantViolation,
}

impl ExceptionCode {
    pub const ALL: [ExceptionCode; 4] = [
        ExceptionCode::ArgumentNotProvided,
        ExceptionCode::ArgumentInvalid,
        ExceptionCode::ArgumentOutOfRange,
        ExceptionCode::InvariantViolation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExceptionCode::ArgumentNotProvided => "GENERIC.ARGUMENT_NOT_PROVIDED",
            ExceptionCode::ArgumentInvalid => "GENERIC.ARGUMENT_INVALID",
            ExceptionCode::ArgumentOutOfRange => "GENERIC.ARGUMENT_OUT_OF_RANGE",
            ExceptionCode::InvariantViolation => "GENERIC.INVARIANT_VIOLATION",
        }
    }
}

impl core::str::FromStr for ExceptionCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExceptionCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| DomainError::invalid(format!("unknown exception code: {s}")))
    }
}

impl Serialize for ExceptionCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExceptionCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl core::fmt::Display for ExceptionCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic construction and invariant failures.
/// Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was missing or empty.
    #[error("argument not provided: {0}")]
    ArgumentNotProvided(String),

    /// A value was present but had the wrong shape.
    #[error("argument invalid: {0}")]
    ArgumentInvalid(String),

    /// A value had the right shape but fell outside an allowed bound.
    #[error("argument out of range: {0}")]
    ArgumentOutOfRange(String),

    /// A concrete entity rejected its own state in `validate()`.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn not_provided(msg: impl Into<String>) -> Self {
        Self::ArgumentNotProvided(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::ArgumentInvalid(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::ArgumentOutOfRange(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// The discriminant of this error kind. Fixed per variant.
    pub fn code(&self) -> ExceptionCode {
        match self {
            DomainError::ArgumentNotProvided(_) => ExceptionCode::ArgumentNotProvided,
            DomainError::ArgumentInvalid(_) => ExceptionCode::ArgumentInvalid,
            DomainError::ArgumentOutOfRange(_) => ExceptionCode::ArgumentOutOfRange,
            DomainError::InvariantViolation(_) => ExceptionCode::InvariantViolation,
        }
    }

    /// The message supplied where the error was raised.
    pub fn message(&self) -> &str {
        match self {
            DomainError::ArgumentNotProvided(msg)
            | DomainError::ArgumentInvalid(msg)
            | DomainError::ArgumentOutOfRange(msg)
            | DomainError::InvariantViolation(msg) => msg,
        }
    }

    /// Plain `{ code, message }` view for callers that surface errors.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.message().to_string(),
        }
    }
}

/// Serializable snapshot of a [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ExceptionCode,
    pub message: String,
}
