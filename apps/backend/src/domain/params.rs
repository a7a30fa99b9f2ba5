//! Parsing of raw request parameters into domain values.

use crate::errors::domain::{DomainError, ValidationKind};

/// Parse a `round` form value; absent or empty means round 0.
pub fn parse_round(raw: Option<&str>) -> Result<i64, DomainError> {
    match raw {
        None | Some("") => Ok(0),
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
            DomainError::validation(
                ValidationKind::MalformedRound,
                format!("round must be an integer, got {raw:?}"),
            )
        }),
    }
}
