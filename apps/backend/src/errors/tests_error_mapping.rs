// Unit tests for error mapping - pure domain logic without HTTP plumbing
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::MalformedRound, "round is not a number");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::MalformedRound);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "round is not a number");

    let missing = DomainError::validation(ValidationKind::MissingSessionId, "id is required");
    let app: AppError = missing.into();
    assert_eq!(app.code().as_str(), "MISSING_SESSION_ID");
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_unknown_session_to_404() {
    let nf = DomainError::not_found(NotFoundKind::Session, "no session");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "SESSION_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_round_conflicts_to_409() {
    let invalid = DomainError::conflict(ConflictKind::InvalidRound, "stale round");
    let app: AppError = invalid.into();
    assert_eq!(app.code().as_str(), "INVALID_ROUND");
    assert_eq!(app.status().as_u16(), 409);
    assert!(matches!(app, AppError::Conflict { .. }));

    let poll = DomainError::conflict(ConflictKind::InconsistentRound, "round drift");
    let app: AppError = poll.into();
    assert_eq!(app.code().as_str(), "INCONSISTENT_ROUND");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn domain_errors_display_their_kind() {
    let err = DomainError::conflict(ConflictKind::InvalidRound, "round 3 vs 1");
    assert_eq!(err.to_string(), "conflict InvalidRound: round 3 vs 1");
    assert_eq!(err.detail(), "round 3 vs 1");
}
