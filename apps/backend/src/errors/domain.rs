//! Domain-level error type used by the color sequence, sessions and the
//! session coordinator.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through the `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Request input the game cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    /// The `round` value is not an integer.
    MalformedRound,
    /// A session id is required past the first round.
    MissingSessionId,
}

/// Domain-level missing resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundKind {
    Session,
}

/// Round claims that disagree with the stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// A guess or fetch names a round the session is not at.
    InvalidRound,
    /// A poll names a round that is neither the current nor the next one.
    InconsistentRound,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Round protocol violation
    Conflict(ConflictKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d)
            | DomainError::NotFound(_, d)
            | DomainError::Conflict(_, d) => d,
        }
    }
}
