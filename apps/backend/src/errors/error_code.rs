//! Error codes for the Colorguess HTTP surface.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string in problem-details
//! responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// `round` is not an integer
    MalformedRound,
    /// Session id missing past the first round
    MissingSessionId,

    // Resource Not Found
    /// Session id is not known to this process
    SessionNotFound,

    // Round Protocol
    /// Guess or fetch for a round the session is not at
    InvalidRound,
    /// Poll for a round that is neither current nor next
    InconsistentRound,

    // System Errors
    /// A view failed to render
    TemplateError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::MalformedRound,
        ErrorCode::MissingSessionId,
        ErrorCode::SessionNotFound,
        ErrorCode::InvalidRound,
        ErrorCode::InconsistentRound,
        ErrorCode::TemplateError,
        ErrorCode::ConfigError,
    ];

    /// Returns the canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedRound => "MALFORMED_ROUND",
            Self::MissingSessionId => "MISSING_SESSION_ID",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::InvalidRound => "INVALID_ROUND",
            Self::InconsistentRound => "INCONSISTENT_ROUND",
            Self::TemplateError => "TEMPLATE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
